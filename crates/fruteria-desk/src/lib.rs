//! Floating panel workspace for the Fruteria dashboard
//!
//! This crate provides the state behind a desktop-like workspace:
//! - Snapping grid geometry and cascade placement
//! - Drop-target tracking for panels dragged in from the sidebar
//! - Open-panel registry with strict z-order
//! - Per-panel move/resize state machines
//! - Grid overlay view model
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Size`, `Rect`)
//! - [`geometry`]: Grid cells, drop snapping, cascade positions
//! - [`panel`]: Panel identity, hit testing and the registry
//! - [`stacking`]: Monotonic z-index allocation
//! - [`input`]: Drag payloads, drop-target tracker, panel controllers
//! - [`events`]: Publish/subscribe bus between components
//! - [`workspace`]: The orchestrator tying everything together
//!
//! ## Example
//!
//! ```rust
//! use fruteria_desk::{
//!     DropCell, ManualClock, Rect, StaticCatalog, StaticSession, Workspace, WorkspaceConfig,
//! };
//!
//! let mut ws = Workspace::mount(
//!     WorkspaceConfig::default(),
//!     StaticCatalog::fruteria(),
//!     &StaticSession::LOGGED_IN,
//!     ManualClock::new(1_000),
//! )
//! .unwrap();
//!
//! ws.nav_drag_start("about");
//! ws.drag_enter();
//! ws.drag_over(10.0, 70.0, Rect::new(0.0, 56.0, 800.0, 600.0));
//! assert_eq!(ws.active_cell(), Some(DropCell::new(0, 0)));
//!
//! let id = ws.drop(None).unwrap();
//! assert_eq!(ws.panel(&id).unwrap().rect, Rect::new(0.0, 56.0, 400.0, 300.0));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state is plain Rust, testable without a browser
//! 2. **Injected Time**: Panel ids use a [`Clock`] so tests are deterministic
//! 3. **Degrade, Don't Fail**: Bad input is logged and ignored, never surfaced

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod math;
pub mod overlay;
pub mod panel;
pub mod session;
pub mod stacking;
pub mod style;
pub mod workspace;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use catalog::{PanelCatalog, PanelDescriptor, StaticCatalog};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{PanelChrome, WorkspaceConfig};
pub use error::{WorkspaceError, WorkspaceResult};
pub use events::{DropInfo, EventBus, SubscriptionId, WorkspaceEvent};
pub use geometry::{default_spawn_rect, snapped_rect, DropCell, Grid};
pub use input::{
    DragPayload, DropTargetTracker, GestureKind, InputResult, InteractionState, PanelController,
    PANEL_KEY_SLOT,
};
pub use math::{Rect, Size, Vec2};
pub use overlay::{GridOverlay, OverlayCell};
pub use panel::{Panel, PanelId, PanelRegion, PanelRegistry, ZIndex};
pub use session::{SessionGate, StaticSession};
pub use stacking::StackingCoordinator;
pub use style::{PanelStyle, ThemeMode, PANEL_STYLE};
pub use workspace::{Workspace, EMPTY_HINT};
