use super::event_source::{ListenerId, REACTION_ADD_EVENT, ReactionEventSource, ReactionListener};
use crate::collector::ReactionEvent;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// In-process listener registry for one client (shard)
///
/// Listeners are invoked in registration order. Dispatch works on a snapshot,
/// so a listener may unsubscribe itself (or others) while being invoked.
#[derive(Default)]
pub struct ListenerRegistry {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(ListenerId, ReactionListener)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to every registered listener
    ///
    /// # Returns
    ///
    /// Number of listeners invoked
    pub fn dispatch(&self, event: &ReactionEvent) -> usize {
        let snapshot: Vec<ReactionListener> = self
            .lock()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        trace!(
            event = REACTION_ADD_EVENT,
            message_id = %event.message_id,
            listeners = snapshot.len(),
            "Dispatching reaction event"
        );

        for listener in &snapshot {
            listener(event);
        }
        snapshot.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<(ListenerId, ReactionListener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ReactionEventSource for ListenerRegistry {
    fn subscribe(&self, listener: ReactionListener) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, listener));
        debug!(event = REACTION_ADD_EVENT, listener_id = id.get(), "Listener subscribed");
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.lock();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        let removed = listeners.len() != before;
        drop(listeners);

        debug!(
            event = REACTION_ADD_EVENT,
            listener_id = id.get(),
            removed,
            "Listener unsubscribed"
        );
        removed
    }
}
