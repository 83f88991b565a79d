use serde::{Deserialize, Serialize};

use super::ZIndex;
use crate::math::{Rect, Size};

/// Unique panel identifier
///
/// Built from the panel key and its creation timestamp
/// (`"about-1718000000000"`), with a numeric suffix when two panels of
/// the same kind open within the same millisecond.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PanelId(String);

impl PanelId {
    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An open floating panel
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Unique among open panels
    pub id: PanelId,
    /// Catalog key this panel was opened from
    pub key: String,
    /// Header title, copied from the catalog entry
    pub title: String,
    /// Geometry in workspace coordinates (top-left anchored)
    pub rect: Rect,
    /// Stacking position; unique among open panels
    pub z_index: ZIndex,
    /// Size floor enforced on every resize
    pub min_size: Size,
}

impl Panel {
    /// Translate the panel. No clamping: panels may leave the viewport.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.rect = self.rect.translated(dx, dy);
    }

    /// Grow or shrink from the bottom-right corner, flooring at `min_size`.
    /// The top-left corner never moves.
    pub fn resize_by(&mut self, dw: f32, dh: f32) {
        self.rect.width = (self.rect.width + dw).max(self.min_size.width);
        self.rect.height = (self.rect.height + dh).max(self.min_size.height);
    }
}
