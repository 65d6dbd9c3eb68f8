//! Reaction collectors
//!
//! A collector listens to "reaction added" events for one message, keeps the
//! reactions whose user passes a filter, and ends on a time limit, a match
//! count, or an explicit stop.

mod error;
mod message_target;
mod options;
mod reaction_collector;
mod reaction_event;

use crate::adapters::ClientResolver;
use serenity::model::id::UserId;

// Re-export public API
pub use error::CollectorError;
pub use message_target::MessageTarget;
pub use options::{CollectOptions, CollectionEnd, StopReason};
pub use reaction_collector::{CollectionFuture, ReactionCollector};
pub use reaction_event::{CollectedReaction, ReactionEvent};

/// Start a long-lived collector
///
/// The caller observes it through [`ReactionCollector::on_reacted`] and
/// [`ReactionCollector::on_end`]. A `permanent` collector is never unsubscribed
/// by its own stop logic; call [`ReactionCollector::detach`] to tear it down.
pub fn continuous_reaction_stream<R, M, F>(
    resolver: &R,
    message: M,
    filter: F,
    permanent: bool,
    options: CollectOptions,
) -> Result<ReactionCollector, CollectorError>
where
    R: ClientResolver + ?Sized,
    M: Into<MessageTarget>,
    F: Fn(UserId) -> bool + Send + Sync + 'static,
{
    ReactionCollector::new(resolver, message, filter, permanent, options)
}

/// Collect reactions once and resolve with the outcome
///
/// The collector is created (and subscribed) when this function is called,
/// not when the future is first polled. It is never permanent. Without `time`
/// or `max_matches` the future only resolves if something else stops the
/// collector, which nothing outside can do; use [`continuous_reaction_stream`]
/// with [`ReactionCollector::ended`] when an external stop is needed.
///
/// Construction errors are reported when the future is awaited.
pub fn collect_reactions<R, M, F>(
    resolver: &R,
    message: M,
    filter: F,
    options: CollectOptions,
) -> CollectionFuture
where
    R: ClientResolver + ?Sized,
    M: Into<MessageTarget>,
    F: Fn(UserId) -> bool + Send + Sync + 'static,
{
    match ReactionCollector::new(resolver, message, filter, false, options) {
        Ok(collector) => collector.ended(),
        Err(err) => CollectionFuture::failed(err),
    }
}
