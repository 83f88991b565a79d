//! Workspace orchestrator
//!
//! Composes the geometry engine, drop-target tracker, panel registry and
//! per-panel controllers, and owns the event bus between them.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          Workspace                           │
//! │  ┌───────────────────┐  ┌───────────────┐  ┌──────────────┐  │
//! │  │ DropTargetTracker │  │ PanelRegistry │  │  EventBus    │  │
//! │  │  (sidebar drag)   │  │ + Stacking    │  │ (pub/sub)    │  │
//! │  └───────────────────┘  └───────────────┘  └──────────────┘  │
//! │  ┌──────────────────────────────────────┐  ┌──────────────┐  │
//! │  │ PanelController per open panel       │  │  geometry    │  │
//! │  │  (move / resize gestures)            │  │  (pure fns)  │  │
//! │  └──────────────────────────────────────┘  └──────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! sidebar drag-start → tracker follows the pointer → resolved cell →
//! on drop the target rect comes from the geometry engine → the registry
//! opens the panel on top → its controller handles later moves/resizes.
//!
//! Every handler runs to completion and then drains the event bus: the
//! workspace applies each event to its own state (overlay flags, active
//! panel) before forwarding it to external subscribers.

use crate::catalog::PanelCatalog;
use crate::clock::Clock;
use crate::config::WorkspaceConfig;
use crate::error::{WorkspaceError, WorkspaceResult};
use crate::events::{DropInfo, EventBus, SubscriptionId, WorkspaceEvent};
use crate::geometry::{default_spawn_rect, snapped_rect, DropCell, Grid};
use crate::input::{
    DragPayload, DropTargetTracker, GestureKind, InputResult, InteractionState, PanelController,
};
use crate::math::{Rect, Size, Vec2};
use crate::overlay::GridOverlay;
use crate::panel::{Panel, PanelId, PanelRegion, PanelRegistry, ZIndex};
use crate::session::SessionGate;
use crate::stacking::StackingCoordinator;

/// Hint rendered when no panel is open
pub const EMPTY_HINT: &str = "No panels open. Drag one from the navigation bar.";

/// The floating panel workspace
pub struct Workspace {
    config: WorkspaceConfig,
    grid: Grid,
    catalog: Box<dyn PanelCatalog>,
    clock: Box<dyn Clock>,
    panels: PanelRegistry,
    controllers: Vec<PanelController>,
    tracker: DropTargetTracker,
    events: EventBus<WorkspaceEvent>,
    /// Payload seeded by the sidebar on drag-start
    nav_payload: Option<DragPayload>,
    /// A panel header drag is in progress somewhere
    panel_dragging: bool,
    /// Panel currently being dragged
    active_panel: Option<PanelId>,
    /// Last cell reported by the tracker
    drop_cell: Option<DropCell>,
    /// Grid region size (header excluded)
    container_size: Size,
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("panels", &self.panels.len())
            .field("nav_payload", &self.nav_payload)
            .field("panel_dragging", &self.panel_dragging)
            .field("active_panel", &self.active_panel)
            .field("drop_cell", &self.drop_cell)
            .field("container_size", &self.container_size)
            .finish()
    }
}

impl Workspace {
    /// Mount the workspace once the session gate reports a logged-in user.
    ///
    /// The registry starts empty; layouts are not restored.
    pub fn mount(
        config: WorkspaceConfig,
        catalog: impl PanelCatalog + 'static,
        session: &dyn SessionGate,
        clock: impl Clock + 'static,
    ) -> WorkspaceResult<Self> {
        if !session.is_logged_in() {
            return Err(WorkspaceError::NotAuthenticated);
        }
        config.validate()?;

        let grid = Grid::from_config(&config);
        let stacking = StackingCoordinator::new(config.z_index_limit);
        tracing::info!(
            rows = grid.rows,
            cols = grid.cols,
            panel_kinds = catalog.entries().len(),
            "workspace mounted"
        );
        Ok(Self {
            panels: PanelRegistry::new(config.min_panel_size, stacking),
            tracker: DropTargetTracker::new(grid),
            grid,
            config,
            catalog: Box::new(catalog),
            clock: Box::new(clock),
            controllers: Vec::new(),
            events: EventBus::new(),
            nav_payload: None,
            panel_dragging: false,
            active_panel: None,
            drop_cell: None,
            container_size: Size::ZERO,
        })
    }

    /// Tear down: close every panel and drop all transient drag state.
    /// Subscribers stay registered.
    pub fn reset(&mut self) {
        self.panels.clear();
        self.controllers.clear();
        self.tracker.on_drop_or_cancel();
        self.nav_payload = None;
        self.panel_dragging = false;
        self.active_panel = None;
        self.drop_cell = None;
        while self.events.pop().is_some() {}
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Active configuration
    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Snapping grid
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The host's panel catalog
    pub fn catalog(&self) -> &dyn PanelCatalog {
        self.catalog.as_ref()
    }

    /// Open-panel registry
    pub fn panels(&self) -> &PanelRegistry {
        &self.panels
    }

    /// Open panels in enumeration order
    pub fn list(&self) -> &[Panel] {
        self.panels.list()
    }

    /// Look up an open panel
    pub fn panel(&self, id: &PanelId) -> Option<&Panel> {
        self.panels.get(id)
    }

    /// True when the empty hint should be shown
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Grid region size (header excluded)
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Cell currently targeted by a sidebar drag
    pub fn active_cell(&self) -> Option<DropCell> {
        self.drop_cell
    }

    /// Key being dragged from the sidebar, for highlighting its entry
    pub fn dragging_nav_key(&self) -> Option<&str> {
        self.nav_payload.as_ref().map(DragPayload::key)
    }

    /// Panel whose header is being dragged
    pub fn active_panel(&self) -> Option<&PanelId> {
        self.active_panel.as_ref()
    }

    /// Whether the grid overlay is shown: a sidebar drag is over the
    /// workspace or a panel is being dragged
    pub fn overlay_visible(&self) -> bool {
        self.tracker.is_drag_active() || self.panel_dragging
    }

    /// Grid overlay view model
    pub fn overlay(&self) -> GridOverlay {
        GridOverlay::new(self.grid, self.drop_cell, self.overlay_visible())
    }

    /// Read-only view of the drop-target tracker
    pub fn tracker(&self) -> &DropTargetTracker {
        &self.tracker
    }

    /// Controller state of a panel
    pub fn interaction(&self, id: &PanelId) -> Option<InteractionState> {
        self.controller(id).map(PanelController::state)
    }

    /// Panels holding a gesture. While non-empty, the host keeps
    /// pointer-move/up listeners attached at document scope.
    pub fn gesture_listeners(&self) -> Vec<&PanelId> {
        self.controllers
            .iter()
            .filter(|c| !c.is_idle())
            .map(PanelController::panel_id)
            .collect()
    }

    /// Whether document-scope pointer listeners are needed right now
    pub fn needs_document_listeners(&self) -> bool {
        self.controllers.iter().any(|c| !c.is_idle())
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Subscribe to workspace notifications
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&WorkspaceEvent) + 'static,
    ) -> SubscriptionId {
        self.events.subscribe(subscriber)
    }

    /// Cancel a workspace subscription
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Subscribe directly to drop-target tracker changes
    pub fn subscribe_drop_info(
        &mut self,
        listener: impl FnMut(&DropInfo) + 'static,
    ) -> SubscriptionId {
        self.tracker.subscribe(listener)
    }

    /// Cancel a drop-target subscription
    pub fn unsubscribe_drop_info(&mut self, id: SubscriptionId) -> bool {
        self.tracker.unsubscribe(id)
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Set the grid region size directly (header already excluded)
    pub fn set_container_size(&mut self, size: Size) {
        self.container_size = size;
        self.tracker.set_container_size(size);
    }

    /// Viewport resize: `width x height` is the whole workspace element,
    /// top bar included. The header is subtracted here and nowhere else.
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        let grid_height = (height - self.config.header_height).max(0.0);
        self.set_container_size(Size::new(width, grid_height));
    }

    // =========================================================================
    // Sidebar drag (external drag source)
    // =========================================================================

    /// The sidebar started dragging the catalog entry `key`
    pub fn nav_drag_start(&mut self, key: &str) {
        self.nav_payload = Some(DragPayload::panel(key));
        self.tracker.begin_external_drag();
    }

    /// The sidebar drag finished, wherever it ended
    pub fn nav_drag_end(&mut self) {
        self.nav_payload = None;
        if self.tracker.is_drag_active() {
            let info = self.tracker.on_drop_or_cancel();
            self.events.publish(WorkspaceEvent::GridDropInfo(info));
        }
        self.flush_events();
    }

    /// Drag entered the workspace or a descendant
    pub fn drag_enter(&mut self) {
        self.tracker.on_pointer_enter_workspace();
    }

    /// Drag left the workspace or a descendant
    pub fn drag_leave(&mut self) {
        if let Some(info) = self.tracker.on_pointer_leave_workspace() {
            self.events.publish(WorkspaceEvent::GridDropInfo(info));
        }
        self.flush_events();
    }

    /// Drag moved over the workspace. `workspace_rect` is the grid
    /// region's client rect; `client_x/y` are viewport coordinates.
    pub fn drag_over(&mut self, client_x: f32, client_y: f32, workspace_rect: Rect) {
        let info = self
            .tracker
            .on_pointer_move_over_workspace(Vec2::new(client_x, client_y), workspace_rect);
        self.events.publish(WorkspaceEvent::GridDropInfo(info));
        self.flush_events();
    }

    /// Drop on the workspace.
    ///
    /// `payload` is what the drop carried; `None` falls back to the payload
    /// seeded by [`Self::nav_drag_start`]. The panel lands in the targeted
    /// cell when one is active and the container is measured, otherwise at
    /// the next cascade position. Unresolvable payloads are a silent no-op.
    pub fn drop(&mut self, payload: Option<DragPayload>) -> Option<PanelId> {
        // Resolve against the cell that was active before the reset
        let cell = self.drop_cell;
        let info = self.tracker.on_drop_or_cancel();
        self.events.publish(WorkspaceEvent::GridDropInfo(info));
        // A drop ends every drag, panel gestures included
        for controller in self.controllers.iter_mut() {
            controller.release(&mut self.events);
        }

        let payload = payload.or_else(|| self.nav_payload.take());
        self.nav_payload = None;

        let opened = match self.open_from_payload(payload, cell) {
            Ok(id) => Some(id),
            Err(err) => {
                tracing::debug!(%err, "drop ignored");
                None
            }
        };
        self.flush_events();
        opened
    }

    /// Drop whose payload is the bare key from the `panelKey` transfer slot
    pub fn drop_from_slot(&mut self, value: Option<&str>) -> Option<PanelId> {
        match DragPayload::from_slot(value) {
            Ok(payload) => self.drop(Some(payload)),
            Err(_) => self.drop(None),
        }
    }

    fn open_from_payload(
        &mut self,
        payload: Option<DragPayload>,
        cell: Option<DropCell>,
    ) -> WorkspaceResult<PanelId> {
        let payload = payload.ok_or(WorkspaceError::MissingPayload)?;
        let key = payload.resolve(self.catalog.as_ref())?.key.clone();
        let rect = self.target_rect(cell);
        let now_ms = self.clock.now_ms();
        let id = self
            .panels
            .open(self.catalog.as_ref(), &key, rect, now_ms)
            .map(|panel| panel.id.clone())
            .ok_or(WorkspaceError::UnknownPanelKind(key))?;
        self.controllers.push(PanelController::new(id.clone()));
        self.events
            .publish(WorkspaceEvent::PanelOpened { id: id.clone() });
        Ok(id)
    }

    /// Where a dropped panel goes
    pub fn target_rect(&self, cell: Option<DropCell>) -> Rect {
        match cell {
            Some(cell) if !self.container_size.is_degenerate() => snapped_rect(
                &self.grid,
                cell,
                self.container_size,
                self.config.header_height,
            ),
            _ => default_spawn_rect(self.panels.len(), &self.config),
        }
    }

    // =========================================================================
    // Panel gestures
    // =========================================================================

    /// Pointer pressed at a workspace point; hit-tests the topmost panel
    pub fn pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let point = Vec2::new(x, y);
        let Some(panel) = self.panels.panel_at(point) else {
            return InputResult::Unhandled;
        };
        let id = panel.id.clone();
        let origin = panel.rect.position();
        let region = panel.region_at(point, &self.config.panel_chrome);

        match region {
            Some(region) if region.starts_gesture() => {
                let kind = if region == PanelRegion::ResizeHandle {
                    GestureKind::Resize
                } else {
                    GestureKind::Move
                };
                self.pointer_down_on(&id, kind, x, y);
                InputResult::Handled
            }
            Some(PanelRegion::CloseButton) => {
                self.close_panel(&id);
                InputResult::Handled
            }
            Some(PanelRegion::Body) => {
                let local = point - origin;
                InputResult::Forward {
                    panel_id: id,
                    local_x: local.x,
                    local_y: local.y,
                }
            }
            Some(PanelRegion::Header | PanelRegion::ResizeHandle) | None => InputResult::Unhandled,
        }
    }

    /// Start a gesture on a known panel, for hosts that hit-test
    /// themselves. Returns false if the panel is unknown or busy.
    pub fn pointer_down_on(&mut self, id: &PanelId, kind: GestureKind, x: f32, y: f32) -> bool {
        if let Err(err) = self.panels.require(id) {
            tracing::debug!(%err, "gesture ignored");
            return false;
        }
        let Some(index) = self.controllers.iter().position(|c| c.panel_id() == id) else {
            return false;
        };
        let started = self.controllers[index].begin(
            kind,
            Vec2::new(x, y),
            &mut self.panels,
            &mut self.events,
        );
        self.flush_events();
        started
    }

    /// Document-scope pointer move; drives every panel holding a gesture
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let at = Vec2::new(x, y);
        let mut handled = false;
        for controller in self.controllers.iter_mut() {
            handled |= controller.pointer_move(at, &mut self.panels);
        }
        if handled {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Document-scope pointer release; ends every gesture
    pub fn pointer_up(&mut self) -> InputResult {
        let mut handled = false;
        for controller in self.controllers.iter_mut() {
            handled |= controller.release(&mut self.events).is_some();
        }
        self.flush_events();
        if handled {
            InputResult::Handled
        } else {
            InputResult::Unhandled
        }
    }

    /// Close a panel, ending any gesture it holds
    pub fn close_panel(&mut self, id: &PanelId) -> bool {
        if let Err(err) = self.panels.require(id) {
            tracing::debug!(%err, "close ignored");
            return false;
        }
        if let Some(index) = self.controllers.iter().position(|c| c.panel_id() == id) {
            let mut controller = self.controllers.remove(index);
            controller.release(&mut self.events);
        }
        self.panels.close(id);
        self.events
            .publish(WorkspaceEvent::PanelClosed { id: id.clone() });
        self.flush_events();
        true
    }

    /// Raise a panel without starting a gesture
    pub fn bring_to_front(&mut self, id: &PanelId) -> Option<ZIndex> {
        self.panels.bring_to_front(id)
    }

    // =========================================================================
    // Cancellation
    // =========================================================================

    /// Global key handler. Escape abandons every drag; returns whether the
    /// key was consumed.
    pub fn key_down(&mut self, key: &str) -> bool {
        if key == "Escape" {
            self.cancel();
            true
        } else {
            false
        }
    }

    /// Return every state machine to idle: tracker, sidebar drag and all
    /// panel gestures. Recovers from gestures orphaned by a lost release.
    pub fn cancel(&mut self) {
        let info = self.tracker.cancel();
        self.events.publish(WorkspaceEvent::GridDropInfo(info));
        self.nav_payload = None;
        for controller in self.controllers.iter_mut() {
            controller.release(&mut self.events);
        }
        self.panel_dragging = false;
        self.active_panel = None;
        self.events.publish(WorkspaceEvent::DragCancelled);
        self.flush_events();
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    fn flush_events(&mut self) {
        while let Some(event) = self.events.pop() {
            self.apply_event(&event);
            self.events.deliver(&event);
        }
    }

    fn apply_event(&mut self, event: &WorkspaceEvent) {
        match event {
            WorkspaceEvent::GridDropInfo(info) => {
                self.drop_cell = info.cell;
                self.container_size = info.size;
            }
            WorkspaceEvent::PanelDragStart { id } => {
                self.panel_dragging = true;
                self.active_panel = Some(id.clone());
            }
            WorkspaceEvent::PanelDragEnd { id } => {
                self.panel_dragging = false;
                self.drop_cell = None;
                if self.active_panel.as_ref() == Some(id) {
                    self.active_panel = None;
                }
            }
            WorkspaceEvent::PanelOpened { .. }
            | WorkspaceEvent::PanelClosed { .. }
            | WorkspaceEvent::DragCancelled => {}
        }
    }

    fn controller(&self, id: &PanelId) -> Option<&PanelController> {
        self.controllers.iter().find(|c| c.panel_id() == id)
    }
}
