//! Panel registry
//!
//! The ordered collection of open panels. Membership is append-on-open and
//! filter-on-close; list order is enumeration order only; visual stacking
//! is governed by `z_index`.

use super::{Panel, PanelId, ZIndex};
use crate::catalog::PanelCatalog;
use crate::error::{WorkspaceError, WorkspaceResult};
use crate::math::{Rect, Size, Vec2};
use crate::stacking::StackingCoordinator;

/// Registry of open panels
#[derive(Clone, Debug)]
pub struct PanelRegistry {
    panels: Vec<Panel>,
    stacking: StackingCoordinator,
    default_min_size: Size,
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new(Size::new(200.0, 100.0), StackingCoordinator::default())
    }
}

impl PanelRegistry {
    /// Create an empty registry
    pub fn new(default_min_size: Size, stacking: StackingCoordinator) -> Self {
        Self {
            panels: Vec::new(),
            stacking,
            default_min_size,
        }
    }

    /// Open a panel of kind `key` at `rect`, on top of every other panel.
    ///
    /// Silently does nothing (returns `None`) when `key` is not in the
    /// catalog.
    pub fn open(
        &mut self,
        catalog: &dyn PanelCatalog,
        key: &str,
        rect: Rect,
        now_ms: u64,
    ) -> Option<&Panel> {
        match self.try_open(catalog, key, rect, now_ms) {
            Ok(index) => self.panels.get(index),
            Err(err) => {
                tracing::debug!(%err, "open ignored");
                None
            }
        }
    }

    fn try_open(
        &mut self,
        catalog: &dyn PanelCatalog,
        key: &str,
        rect: Rect,
        now_ms: u64,
    ) -> WorkspaceResult<usize> {
        let descriptor = catalog.resolve(key)?;
        let min_size = descriptor.min_size.unwrap_or(self.default_min_size);
        let id = self.unique_id(key, now_ms);
        let z_index = self.stacking.next_z_index(&mut self.panels);

        let panel = Panel {
            id,
            key: descriptor.key.clone(),
            title: descriptor.title.clone(),
            rect: Rect::from_pos_size(rect.position(), rect.size().max(min_size)),
            z_index,
            min_size,
        };
        tracing::info!(panel_id = %panel.id, z_index, "panel opened");
        self.panels.push(panel);
        Ok(self.panels.len() - 1)
    }

    /// `"{key}-{now_ms}"`, suffixed until it is unique among open panels
    fn unique_id(&self, key: &str, now_ms: u64) -> PanelId {
        let base = format!("{}-{}", key, now_ms);
        let mut candidate = base.clone();
        let mut n = 1;
        while self.panels.iter().any(|p| p.id.as_str() == candidate) {
            candidate = format!("{}-{}", base, n);
            n += 1;
        }
        PanelId::from(candidate)
    }

    /// Remove a panel. Remaining z-indices are left as they are.
    pub fn close(&mut self, id: &PanelId) -> Option<Panel> {
        let index = self.panels.iter().position(|p| &p.id == id)?;
        let panel = self.panels.remove(index);
        tracing::info!(panel_id = %panel.id, "panel closed");
        Some(panel)
    }

    /// Translate a panel by `(dx, dy)`. Returns false if it is not open.
    pub fn move_by(&mut self, id: &PanelId, dx: f32, dy: f32) -> bool {
        self.with_panel(id, |panel| panel.move_by(dx, dy)).is_ok()
    }

    /// Resize a panel by `(dw, dh)`, flooring at its minimum size.
    /// Returns false if it is not open.
    pub fn resize_by(&mut self, id: &PanelId, dw: f32, dh: f32) -> bool {
        self.with_panel(id, |panel| panel.resize_by(dw, dh)).is_ok()
    }

    fn with_panel(&mut self, id: &PanelId, f: impl FnOnce(&mut Panel)) -> WorkspaceResult<()> {
        let panel = self
            .panels
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| WorkspaceError::PanelNotFound(id.clone()))?;
        f(panel);
        Ok(())
    }

    /// Raise a panel above all others
    pub fn bring_to_front(&mut self, id: &PanelId) -> Option<ZIndex> {
        self.stacking.bring_to_front(&mut self.panels, id)
    }

    /// Get a panel by ID
    pub fn get(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| &p.id == id)
    }

    /// Get a panel by ID, failing with `PanelNotFound`
    pub fn require(&self, id: &PanelId) -> WorkspaceResult<&Panel> {
        self.get(id)
            .ok_or_else(|| WorkspaceError::PanelNotFound(id.clone()))
    }

    /// Open panels in enumeration (creation) order
    pub fn list(&self) -> &[Panel] {
        &self.panels
    }

    /// Open panels from bottom to top
    pub fn panels_by_z(&self) -> Vec<&Panel> {
        let mut panels: Vec<_> = self.panels.iter().collect();
        panels.sort_by_key(|p| p.z_index);
        panels
    }

    /// The panel with the highest z-index
    pub fn topmost(&self) -> Option<&Panel> {
        self.panels.iter().max_by_key(|p| p.z_index)
    }

    /// Topmost panel containing a workspace point
    pub fn panel_at(&self, point: Vec2) -> Option<&Panel> {
        self.panels
            .iter()
            .filter(|p| p.rect.contains(point))
            .max_by_key(|p| p.z_index)
    }

    /// Number of open panels
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    /// True when no panel is open
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Close everything and restart z-order allocation
    pub fn clear(&mut self) {
        self.panels.clear();
        self.stacking.reset();
    }
}
