//! Panel management module
//!
//! Provides the open-panel registry, panel identity and hit testing.

#[allow(clippy::module_inception)]
mod panel;
mod region;
mod registry;

pub use panel::{Panel, PanelId};
pub use region::PanelRegion;
pub use registry::PanelRegistry;

/// Stacking position; higher renders on top
pub type ZIndex = u32;
