use reactgate::adapters::{ListenerId, ListenerRegistry, ReactionEventSource, ReactionListener};
use reactgate::collector::ReactionEvent;
use std::sync::Mutex;

/// Event source that records every subscribe/unsubscribe call
#[derive(Default)]
pub struct MockEventSource {
    registry: ListenerRegistry,
    subscribed: Mutex<Vec<ListenerId>>,
    unsubscribed: Mutex<Vec<ListenerId>>,
}

#[allow(dead_code)]
impl MockEventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver an event to the current listeners
    pub fn dispatch(&self, event: &ReactionEvent) -> usize {
        self.registry.dispatch(event)
    }

    /// Number of listeners currently registered
    pub fn active_listeners(&self) -> usize {
        self.registry.len()
    }

    pub fn subscribe_calls(&self) -> Vec<ListenerId> {
        self.subscribed.lock().unwrap().clone()
    }

    pub fn unsubscribe_calls(&self) -> Vec<ListenerId> {
        self.unsubscribed.lock().unwrap().clone()
    }
}

impl ReactionEventSource for MockEventSource {
    fn subscribe(&self, listener: ReactionListener) -> ListenerId {
        let id = self.registry.subscribe(listener);
        self.subscribed.lock().unwrap().push(id);
        id
    }

    fn unsubscribe(&self, id: ListenerId) -> bool {
        self.unsubscribed.lock().unwrap().push(id);
        self.registry.unsubscribe(id)
    }
}
