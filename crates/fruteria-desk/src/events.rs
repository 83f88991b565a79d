//! Workspace event bus
//!
//! Panels and the workspace are otherwise decoupled; notifications such as
//! "panel drag started" travel through an explicit bus owned by the
//! workspace instead of window-level custom events.
//!
//! Events are queued by [`EventBus::publish`] and handed out by
//! [`EventBus::pop`], so the owner can react to an event itself before
//! forwarding it to subscribers with [`EventBus::deliver`]. [`EventBus::emit`]
//! skips the queue for components that have no owner-side reaction.

use std::collections::VecDeque;

use serde::Serialize;

use crate::geometry::DropCell;
use crate::math::Size;
use crate::panel::PanelId;

/// Drop-target state reported to listeners on every tracker change
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DropInfo {
    /// Resolved cell, or `None` when there is no active target
    pub cell: Option<DropCell>,
    /// Current container size
    pub size: Size,
}

/// Notifications published by the workspace
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WorkspaceEvent {
    /// Drop-target tracker state changed
    GridDropInfo(DropInfo),
    /// A panel header drag began
    PanelDragStart { id: PanelId },
    /// A panel header drag ended (release or cancel)
    PanelDragEnd { id: PanelId },
    /// A panel was opened by a drop
    PanelOpened { id: PanelId },
    /// A panel was closed
    PanelClosed { id: PanelId },
    /// Every drag was abandoned (Escape or explicit cancel)
    DragCancelled,
}

/// Handle returned by [`EventBus::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<E> = Box<dyn FnMut(&E)>;

/// Single-threaded publish/subscribe channel
pub struct EventBus<E> {
    queue: VecDeque<E>,
    subscribers: Vec<(SubscriptionId, Subscriber<E>)>,
    next_id: u64,
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self {
            queue: VecDeque::new(),
            subscribers: Vec::new(),
            next_id: 1,
        }
    }
}

impl<E> std::fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("queued", &self.queue.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<E> EventBus<E> {
    /// Create an empty bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber
    pub fn subscribe(&mut self, subscriber: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Queue an event for the owner to process
    pub fn publish(&mut self, event: E) {
        self.queue.push_back(event);
    }

    /// Take the oldest queued event
    pub fn pop(&mut self) -> Option<E> {
        self.queue.pop_front()
    }

    /// Hand an event to every subscriber, in subscription order
    pub fn deliver(&mut self, event: &E) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(event);
        }
    }

    /// Deliver immediately, bypassing the queue
    pub fn emit(&mut self, event: E) {
        self.deliver(&event);
    }
}
