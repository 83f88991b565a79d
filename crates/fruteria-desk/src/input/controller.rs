//! Panel drag/resize controller
//!
//! One controller per open panel. It turns pointer positions into
//! `move_by` / `resize_by` calls on the registry.
//!
//! ```text
//!            begin(Move)                 begin(Resize)
//!   Dragging <─────────── Idle ───────────> Resizing
//!      │  ▲ pointer_move   ▲   pointer_move ▲  │
//!      └──┘                │                └──┘
//!      └──── release ──────┴────── release ─────┘
//! ```
//!
//! Both gestures can only start from `Idle`; a second press while one is
//! in progress is ignored until release. Move and release events come
//! from document scope, so the pointer may be anywhere.

use crate::events::{EventBus, WorkspaceEvent};
use crate::math::Vec2;
use crate::panel::{PanelId, PanelRegistry};

/// Kind of gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Header drag, translating the panel
    Move,
    /// Corner-grip drag, resizing the panel
    Resize,
}

/// Controller state; the last recorded pointer position travels with it
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging {
        last: Vec2,
    },
    Resizing {
        last: Vec2,
    },
}

/// Move/resize state machine for a single panel
#[derive(Clone, Debug)]
pub struct PanelController {
    panel_id: PanelId,
    state: InteractionState,
}

impl PanelController {
    /// Create an idle controller for a panel
    pub fn new(panel_id: PanelId) -> Self {
        Self {
            panel_id,
            state: InteractionState::Idle,
        }
    }

    /// Panel this controller drives
    pub fn panel_id(&self) -> &PanelId {
        &self.panel_id
    }

    /// Current state
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// True when no gesture is in progress
    pub fn is_idle(&self) -> bool {
        self.state == InteractionState::Idle
    }

    /// Gesture in progress, if any
    pub fn gesture(&self) -> Option<GestureKind> {
        match self.state {
            InteractionState::Idle => None,
            InteractionState::Dragging { .. } => Some(GestureKind::Move),
            InteractionState::Resizing { .. } => Some(GestureKind::Resize),
        }
    }

    /// Start a gesture at pointer position `at`.
    ///
    /// A move raises the panel before it starts and publishes
    /// `PanelDragStart`. Returns false, changing nothing, unless idle.
    pub fn begin(
        &mut self,
        kind: GestureKind,
        at: Vec2,
        registry: &mut PanelRegistry,
        bus: &mut EventBus<WorkspaceEvent>,
    ) -> bool {
        if !self.is_idle() {
            tracing::debug!(panel_id = %self.panel_id, ?kind, "gesture already in progress");
            return false;
        }
        match kind {
            GestureKind::Move => {
                registry.bring_to_front(&self.panel_id);
                self.state = InteractionState::Dragging { last: at };
                bus.publish(WorkspaceEvent::PanelDragStart {
                    id: self.panel_id.clone(),
                });
            }
            GestureKind::Resize => {
                self.state = InteractionState::Resizing { last: at };
            }
        }
        true
    }

    /// Apply the delta since the last recorded position.
    /// Returns false when idle.
    pub fn pointer_move(&mut self, at: Vec2, registry: &mut PanelRegistry) -> bool {
        match self.state {
            InteractionState::Idle => false,
            InteractionState::Dragging { last } => {
                let delta = at - last;
                registry.move_by(&self.panel_id, delta.x, delta.y);
                self.state = InteractionState::Dragging { last: at };
                true
            }
            InteractionState::Resizing { last } => {
                let delta = at - last;
                registry.resize_by(&self.panel_id, delta.x, delta.y);
                self.state = InteractionState::Resizing { last: at };
                true
            }
        }
    }

    /// End the gesture. A finished move publishes `PanelDragEnd`.
    /// Returns the gesture that ended, if any.
    pub fn release(&mut self, bus: &mut EventBus<WorkspaceEvent>) -> Option<GestureKind> {
        let ended = self.gesture()?;
        self.state = InteractionState::Idle;
        if ended == GestureKind::Move {
            bus.publish(WorkspaceEvent::PanelDragEnd {
                id: self.panel_id.clone(),
            });
        }
        Some(ended)
    }
}
