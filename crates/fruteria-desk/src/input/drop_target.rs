//! Drop-target tracker
//!
//! Follows the pointer while something is dragged from the sidebar over the
//! workspace and resolves it to a grid cell.
//!
//! Enter/leave notifications bubble through nested elements and arrive
//! unbalanced, so the tracker keeps a depth counter: every enter
//! increments it, every leave decrements it, and only a depth of zero
//! counts as having really left. The counter never goes below zero.

use crate::events::{DropInfo, EventBus, SubscriptionId};
use crate::geometry::{DropCell, Grid};
use crate::math::{Rect, Size, Vec2};

/// Transient drag-over state for the workspace
#[derive(Debug)]
pub struct DropTargetTracker {
    grid: Grid,
    depth: u32,
    drag_active: bool,
    active_cell: Option<DropCell>,
    container_size: Size,
    listeners: EventBus<DropInfo>,
}

impl DropTargetTracker {
    /// Create an idle tracker for `grid`
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            depth: 0,
            drag_active: false,
            active_cell: None,
            container_size: Size::ZERO,
            listeners: EventBus::new(),
        }
    }

    /// Register a callback invoked on every reported change
    pub fn subscribe(&mut self, listener: impl FnMut(&DropInfo) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    /// Remove a callback
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Cell currently under the pointer, if any
    pub fn active_cell(&self) -> Option<DropCell> {
        self.active_cell
    }

    /// Last known container size
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Current enter/leave nesting depth
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Whether a sidebar drag is over the workspace
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    /// Grid used for cell resolution
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Update the container size (mount and viewport resize).
    /// Does not notify; the next drag event carries the new size.
    pub fn set_container_size(&mut self, size: Size) {
        self.container_size = size;
    }

    /// Mark a sidebar drag as active without an enter event.
    ///
    /// The sidebar calls this on drag-start so the overlay shows before the
    /// pointer reaches the workspace.
    pub fn begin_external_drag(&mut self) {
        self.drag_active = true;
    }

    /// The drag entered the workspace or one of its descendants
    pub fn on_pointer_enter_workspace(&mut self) {
        self.depth = self.depth.saturating_add(1);
        self.drag_active = true;
    }

    /// The drag left the workspace or one of its descendants.
    ///
    /// Reports "no target" once the depth is back to zero; extra leaves
    /// keep the depth at zero and report again.
    pub fn on_pointer_leave_workspace(&mut self) -> Option<DropInfo> {
        self.depth = self.depth.saturating_sub(1);
        if self.depth > 0 {
            return None;
        }
        self.drag_active = false;
        self.active_cell = None;
        Some(self.notify())
    }

    /// Resolve the pointer to a cell of the workspace grid.
    ///
    /// `client` and `workspace_rect` share a coordinate space (viewport
    /// pixels); `workspace_rect` covers the grid region. The reported size
    /// is the size of that rect. A zero-size rect clears the target.
    pub fn on_pointer_move_over_workspace(
        &mut self,
        client: Vec2,
        workspace_rect: Rect,
    ) -> DropInfo {
        let size = workspace_rect.size();
        let cell = self.grid.cell_at(client - workspace_rect.position(), size);
        self.container_size = size;
        if self.active_cell != cell {
            match cell {
                Some(cell) => tracing::trace!(row = cell.row, col = cell.col, "drop cell changed"),
                None => tracing::trace!("drop cell cleared"),
            }
        }
        self.active_cell = cell;
        self.notify()
    }

    /// The drag was dropped or cancelled: back to idle
    pub fn on_drop_or_cancel(&mut self) -> DropInfo {
        self.depth = 0;
        self.drag_active = false;
        self.active_cell = None;
        self.notify()
    }

    /// Escape-key reset; identical to [`Self::on_drop_or_cancel`]
    pub fn cancel(&mut self) -> DropInfo {
        self.on_drop_or_cancel()
    }

    fn notify(&mut self) -> DropInfo {
        let info = DropInfo {
            cell: self.active_cell,
            size: self.container_size,
        };
        self.listeners.emit(info);
        info
    }
}

impl Default for DropTargetTracker {
    fn default() -> Self {
        Self::new(Grid::default())
    }
}
