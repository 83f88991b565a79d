//! Workspace configuration
//!
//! Defaults reproduce the stock layout: a 2x2 snapping grid below a 56px
//! top bar, panels no smaller than 200x100, and untargeted drops cascading
//! from (60, 60) in 40px steps.

use serde::{Deserialize, Serialize};

use crate::error::{WorkspaceError, WorkspaceResult};
use crate::math::{Size, Vec2};

/// Hit-testing dimensions of the panel chrome, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelChrome {
    /// Height of the draggable title bar
    pub header_height: f32,
    /// Width of the close button at the right end of the title bar
    pub close_button_width: f32,
    /// Side length of the square resize grip
    pub resize_handle_size: f32,
    /// Distance of the resize grip from the bottom-right corner
    pub resize_handle_inset: f32,
}

impl Default for PanelChrome {
    fn default() -> Self {
        Self {
            header_height: 40.0,
            close_button_width: 32.0,
            resize_handle_size: 16.0,
            resize_handle_inset: 4.0,
        }
    }
}

/// Workspace configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Number of grid rows in the drop overlay
    pub grid_rows: u32,
    /// Number of grid columns in the drop overlay
    pub grid_cols: u32,
    /// Height of the fixed top bar; the grid begins below it
    pub header_height: f32,
    /// Global floor for panel width/height
    pub min_panel_size: Size,
    /// Position of the first cascaded panel
    pub spawn_origin: Vec2,
    /// Offset applied per already-open panel, on both axes
    pub spawn_step: f32,
    /// Size of cascaded panels
    pub spawn_size: Size,
    /// Z-index value at which stacking compacts back to `1..=N`
    pub z_index_limit: u32,
    /// Panel chrome used for hit-testing
    pub panel_chrome: PanelChrome,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            grid_rows: 2,
            grid_cols: 2,
            header_height: 56.0,
            min_panel_size: Size::new(200.0, 100.0),
            spawn_origin: Vec2::new(60.0, 60.0),
            spawn_step: 40.0,
            spawn_size: Size::new(700.0, 420.0),
            z_index_limit: u32::MAX - 1,
            panel_chrome: PanelChrome::default(),
        }
    }
}

impl WorkspaceConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> WorkspaceResult<Self> {
        let config: WorkspaceConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable
    pub fn validate(&self) -> WorkspaceResult<()> {
        if self.grid_rows == 0 {
            return Err(WorkspaceError::InvalidConfig {
                field: "grid_rows",
                reason: "must be at least 1",
            });
        }
        if self.grid_cols == 0 {
            return Err(WorkspaceError::InvalidConfig {
                field: "grid_cols",
                reason: "must be at least 1",
            });
        }
        if self.header_height.is_nan() || self.header_height < 0.0 {
            return Err(WorkspaceError::InvalidConfig {
                field: "header_height",
                reason: "must be non-negative",
            });
        }
        if self.min_panel_size.is_degenerate() {
            return Err(WorkspaceError::InvalidConfig {
                field: "min_panel_size",
                reason: "must be positive",
            });
        }
        if self.spawn_size.is_degenerate() {
            return Err(WorkspaceError::InvalidConfig {
                field: "spawn_size",
                reason: "must be positive",
            });
        }
        if self.z_index_limit < 2 {
            return Err(WorkspaceError::InvalidConfig {
                field: "z_index_limit",
                reason: "must be at least 2",
            });
        }
        Ok(())
    }
}
