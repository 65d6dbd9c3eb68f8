use crate::collector::ReactionEvent;
use std::sync::Arc;

/// Gateway event a collector listens to
pub const REACTION_ADD_EVENT: &str = "messageReactionAdd";

/// Callback invoked for every "reaction added" event delivered by a source
pub type ReactionListener = Arc<dyn Fn(&ReactionEvent) + Send + Sync>;

/// Handle returned by [`ReactionEventSource::subscribe`], used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

impl ListenerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Subscribe/unsubscribe capability of a chat client
///
/// Collectors depend on this instead of a concrete client type.
pub trait ReactionEventSource: Send + Sync {
    /// Register a listener for reaction-add events
    fn subscribe(&self, listener: ReactionListener) -> ListenerId;

    /// Remove a listener
    ///
    /// # Returns
    ///
    /// `true` if the listener was registered and has been removed
    fn unsubscribe(&self, id: ListenerId) -> bool;
}
