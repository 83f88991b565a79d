//! Input handling
//!
//! - [`DragPayload`]: typed sidebar drag payload
//! - [`DropTargetTracker`]: grid cell under the pointer during a sidebar drag
//! - [`PanelController`]: per-panel move/resize state machine

mod controller;
mod drop_target;
mod payload;

use serde::Serialize;

pub use controller::{GestureKind, InteractionState, PanelController};
pub use drop_target::DropTargetTracker;
pub use payload::{DragPayload, PANEL_KEY_SLOT};

/// Outcome of routing a pointer event
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum InputResult {
    /// Event was consumed by the workspace
    Handled,
    /// Event landed on panel content; the host should handle it
    Forward {
        panel_id: crate::panel::PanelId,
        local_x: f32,
        local_y: f32,
    },
    /// Event was not over anything the workspace cares about
    Unhandled,
}
