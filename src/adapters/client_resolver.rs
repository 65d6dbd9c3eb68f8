use super::event_source::ReactionEventSource;
use crate::collector::MessageTarget;
use std::sync::Arc;

/// Interface for resolving the client that owns a message
pub trait ClientResolver: Send + Sync {
    /// Resolve the event source that delivers reactions for `message`
    ///
    /// # Returns
    ///
    /// `None` if no client is responsible for the message
    fn resolve(&self, message: &MessageTarget) -> Option<Arc<dyn ReactionEventSource>>;
}

/// A single event source owns every message
impl<S> ClientResolver for Arc<S>
where
    S: ReactionEventSource + 'static,
{
    fn resolve(&self, _message: &MessageTarget) -> Option<Arc<dyn ReactionEventSource>> {
        Some(self.clone())
    }
}
