//! Grid drop overlay
//!
//! View model for the translucent grid drawn over the workspace while a
//! sidebar drag or a panel drag is in progress. The overlay never takes
//! pointer events; it only highlights the active cell.

use serde::Serialize;

use crate::geometry::{DropCell, Grid};

/// One overlay cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OverlayCell {
    pub row: u32,
    pub col: u32,
    pub active: bool,
    /// Stable element id, `cell-{row}-{col}`
    pub test_id: String,
}

/// Everything the host needs to draw the overlay
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GridOverlay {
    pub rows: u32,
    pub cols: u32,
    pub visible: bool,
    pub opacity: f32,
    pub active_cell: Option<DropCell>,
    pub cells: Vec<OverlayCell>,
}

impl GridOverlay {
    /// Build the overlay for `grid`
    pub fn new(grid: Grid, active_cell: Option<DropCell>, visible: bool) -> Self {
        let cells = grid
            .cells()
            .map(|cell| OverlayCell {
                row: cell.row,
                col: cell.col,
                active: active_cell == Some(cell),
                test_id: format!("cell-{}-{}", cell.row, cell.col),
            })
            .collect();
        Self {
            rows: grid.rows,
            cols: grid.cols,
            visible,
            opacity: if visible { 1.0 } else { 0.0 },
            active_cell,
            cells,
        }
    }
}
