//! Geometry engine
//!
//! Pure functions placing panels in the workspace. Nothing here holds
//! state; every input arrives as an argument.
//!
//! ## Header contract
//!
//! The snapping grid occupies the region *below* the top bar. The
//! container height handed to [`Grid::cell_rect`] already excludes the
//! header, and the header height is only ever added to `y`:
//!
//! ```text
//!  y = 0  ┌──────────────── top bar (header_height) ──────────────┐
//!  y = H0 ├───────────────────────────┬───────────────────────────┤
//!         │        (0, 0)             │         (0, 1)            │
//!         ├───────────────────────────┼───────────────────────────┤
//!         │        (1, 0)             │         (1, 1)            │
//!  H0 + H └───────────────────────────┴───────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::config::WorkspaceConfig;
use crate::math::{round_px, Rect, Size, Vec2};

/// A resolved grid cell
///
/// Always satisfies `row < grid.rows` and `col < grid.cols` for the grid
/// that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DropCell {
    pub row: u32,
    pub col: u32,
}

impl DropCell {
    /// Create a new cell reference
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Snapping grid dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub rows: u32,
    pub cols: u32,
}

impl Grid {
    /// Create a grid. Zero dimensions are raised to one.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }

    /// Grid described by a workspace configuration
    pub fn from_config(config: &WorkspaceConfig) -> Self {
        Self::new(config.grid_rows, config.grid_cols)
    }

    /// Check whether a cell lies inside this grid
    pub fn contains(&self, cell: DropCell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Iterate over all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = DropCell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| DropCell::new(row, col)))
    }

    /// Rectangle of cell `(row, col)` in workspace coordinates, rounded to
    /// integer pixels (half up).
    ///
    /// `container_height` excludes the header; `header_height` shifts the
    /// result down without affecting the cell size.
    pub fn cell_rect(
        &self,
        row: u32,
        col: u32,
        container_width: f32,
        container_height: f32,
        header_height: f32,
    ) -> Rect {
        let cell_width = container_width / self.cols as f32;
        let cell_height = container_height / self.rows as f32;
        Rect::new(
            round_px(col as f32 * cell_width),
            round_px(row as f32 * cell_height + header_height),
            round_px(cell_width),
            round_px(cell_height),
        )
    }

    /// Resolve a point relative to the grid region's origin to a cell.
    ///
    /// Points outside the region clamp to the nearest edge cell. Returns
    /// `None` when the region has no usable size.
    pub fn cell_at(&self, local: Vec2, area: Size) -> Option<DropCell> {
        if area.is_degenerate() {
            return None;
        }
        let cell_width = area.width / self.cols as f32;
        let cell_height = area.height / self.rows as f32;
        let col = clamp_index((local.x / cell_width).floor(), self.cols);
        let row = clamp_index((local.y / cell_height).floor(), self.rows);
        Some(DropCell::new(row, col))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(2, 2)
    }
}

fn clamp_index(value: f32, count: u32) -> u32 {
    // NaN falls through `max` to 0
    value.max(0.0).min((count - 1) as f32) as u32
}

/// Placement for a panel dropped without a resolved cell.
///
/// Each successive panel is offset by `spawn_step` on both axes so no two
/// untargeted panels stack exactly.
pub fn default_spawn_rect(existing_count: usize, config: &WorkspaceConfig) -> Rect {
    let offset = existing_count as f32 * config.spawn_step;
    Rect::new(
        config.spawn_origin.x + offset,
        config.spawn_origin.y + offset,
        config.spawn_size.width,
        config.spawn_size.height,
    )
}

/// Placement for a panel dropped on `cell`, clamped so it never extends
/// past the right or bottom edge of the container.
///
/// `container` excludes the header.
pub fn snapped_rect(grid: &Grid, cell: DropCell, container: Size, header_height: f32) -> Rect {
    let cell_rect = grid.cell_rect(
        cell.row,
        cell.col,
        container.width,
        container.height,
        header_height,
    );
    let remaining_width = container.width - cell_rect.x;
    let remaining_height = container.height - (cell_rect.y - header_height);
    Rect::new(
        cell_rect.x,
        cell_rect.y,
        cell_rect.width.min(remaining_width),
        cell_rect.height.min(remaining_height),
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Cascade offsets grow linearly with the open count; size is fixed
        #[test]
        fn spawn_cascade_is_linear(n in 0usize..500) {
            let config = WorkspaceConfig::default();
            let r = default_spawn_rect(n, &config);
            prop_assert_eq!(r.x, 60.0 + n as f32 * 40.0);
            prop_assert_eq!(r.y, 60.0 + n as f32 * 40.0);
            prop_assert_eq!(r.width, 700.0);
            prop_assert_eq!(r.height, 420.0);
        }

        /// Cells tile the grid region: neighbours touch within one pixel and
        /// the outer cells reach the region edges within one pixel.
        #[test]
        fn grid_cells_tile_region(
            rows in 1u32..6,
            cols in 1u32..6,
            width in 100u32..2000,
            height in 100u32..2000,
            header in 0u32..100,
        ) {
            let grid = Grid::new(rows, cols);
            let (w, h, h0) = (width as f32, height as f32, header as f32);

            for cell in grid.cells() {
                let r = grid.cell_rect(cell.row, cell.col, w, h, h0);
                prop_assert!(r.x >= 0.0 && r.y >= h0);

                if cell.col + 1 < cols {
                    let right = grid.cell_rect(cell.row, cell.col + 1, w, h, h0);
                    prop_assert!((right.x - r.right()).abs() <= 1.0);
                } else {
                    prop_assert!((r.right() - w).abs() <= 1.0);
                }

                if cell.row + 1 < rows {
                    let below = grid.cell_rect(cell.row + 1, cell.col, w, h, h0);
                    prop_assert!((below.y - r.bottom()).abs() <= 1.0);
                } else {
                    prop_assert!((r.bottom() - (h0 + h)).abs() <= 1.0);
                }
            }
        }

        /// Any point resolves to an in-bounds cell
        #[test]
        fn cell_at_is_in_bounds(
            rows in 1u32..8,
            cols in 1u32..8,
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
        ) {
            let grid = Grid::new(rows, cols);
            let cell = grid.cell_at(Vec2::new(x, y), Size::new(800.0, 600.0)).unwrap();
            prop_assert!(grid.contains(cell));
        }
    }
}
