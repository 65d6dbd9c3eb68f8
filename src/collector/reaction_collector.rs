use super::error::CollectorError;
use super::message_target::MessageTarget;
use super::options::{CollectOptions, CollectionEnd, StopReason};
use super::reaction_event::{CollectedReaction, ReactionEvent};
use crate::adapters::{ClientResolver, ListenerId, ReactionEventSource, ReactionListener};
use serenity::model::id::UserId;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

type ReactionFilter = Box<dyn Fn(UserId) -> bool + Send + Sync>;
type ReactedObserver = Arc<dyn Fn(&CollectedReaction) + Send + Sync>;
type EndObserver = Box<dyn FnOnce(&CollectionEnd) + Send>;

/// Collects reactions added to one message by users accepted by a filter
///
/// The collector subscribes to its client as soon as it is created and ends on
/// the first of:
/// - `options.time` elapsing ([`StopReason::Time`])
/// - `options.max_matches` reactions accepted ([`StopReason::MaxMatches`])
/// - an explicit [`stop`](Self::stop)
///
/// Ending unsubscribes the listener unless the collector is permanent.
/// Cloning yields another handle to the same collector.
#[derive(Clone)]
pub struct ReactionCollector {
    inner: Arc<CollectorInner>,
}

struct CollectorInner {
    target: MessageTarget,
    filter: ReactionFilter,
    permanent: bool,
    options: CollectOptions,
    source: Arc<dyn ReactionEventSource>,
    // Only written while `state` is locked
    ended: AtomicBool,
    state: Mutex<CollectorState>,
}

#[derive(Default)]
struct CollectorState {
    collected: Vec<CollectedReaction>,
    listener: Option<ListenerId>,
    timer: Option<JoinHandle<()>>,
    reacted_observers: Vec<ReactedObserver>,
    end_observers: Vec<EndObserver>,
    outcome: Option<CollectionEnd>,
}

impl ReactionCollector {
    /// Create a collector and subscribe it to the client owning `message`
    ///
    /// # Arguments
    ///
    /// * `resolver` - Resolves the client (shard) delivering the message's reactions
    /// * `message` - The message to collect reactions on
    /// * `filter` - Decides whether a reacting user's reaction counts
    /// * `permanent` - If true, stopping never unsubscribes the listener
    /// * `options` - Time and match-count limits
    ///
    /// # Errors
    ///
    /// * [`CollectorError::InvalidOptions`] - `max_matches` is zero
    /// * [`CollectorError::NoRuntime`] - `time` is set outside a tokio runtime
    /// * [`CollectorError::ClientUnresolved`] - no client owns the message
    pub fn new<R, M, F>(
        resolver: &R,
        message: M,
        filter: F,
        permanent: bool,
        options: CollectOptions,
    ) -> Result<Self, CollectorError>
    where
        R: ClientResolver + ?Sized,
        M: Into<MessageTarget>,
        F: Fn(UserId) -> bool + Send + Sync + 'static,
    {
        options.validate()?;
        let target = message.into();

        let runtime = match options.time {
            Some(_) => Some(
                tokio::runtime::Handle::try_current().map_err(|_| CollectorError::NoRuntime)?,
            ),
            None => None,
        };

        let source = resolver
            .resolve(&target)
            .ok_or(CollectorError::ClientUnresolved {
                message_id: target.message_id,
            })?;

        let inner = Arc::new(CollectorInner {
            target,
            filter: Box::new(filter),
            permanent,
            options,
            source,
            ended: AtomicBool::new(false),
            state: Mutex::new(CollectorState::default()),
        });

        let listener: ReactionListener = {
            let inner = inner.clone();
            Arc::new(move |event| {
                inner.handle_event(event);
            })
        };
        let listener_id = inner.source.subscribe(listener);

        let timer = match (runtime, options.time) {
            (Some(runtime), Some(time)) => {
                let inner = inner.clone();
                Some(runtime.spawn(async move {
                    tokio::time::sleep(time).await;
                    inner.stop(StopReason::Time);
                }))
            }
            _ => None,
        };

        // An event delivered right after `subscribe` may already have ended the
        // collector, before the listener id and timer were recorded.
        let mut state = inner.state();
        if inner.is_ended() {
            drop(state);
            if let Some(timer) = timer {
                timer.abort();
            }
            if !permanent {
                inner.source.unsubscribe(listener_id);
            }
        } else {
            state.listener = Some(listener_id);
            state.timer = timer;
            drop(state);
        }

        info!(
            message_id = %target.message_id,
            channel_id = %target.channel_id,
            guild_id = ?target.guild_id,
            permanent,
            time = ?options.time,
            max_matches = ?options.max_matches,
            "Reaction collector started"
        );

        Ok(Self { inner })
    }

    /// Process one reaction-add event
    ///
    /// Called for every reaction on every message the client sees.
    ///
    /// # Returns
    ///
    /// `true` if this event ended the collection (max matches reached)
    pub fn handle_event(&self, event: &ReactionEvent) -> bool {
        self.inner.handle_event(event)
    }

    /// End the collection
    ///
    /// No-op if the collector has already ended.
    pub fn stop(&self, reason: impl Into<StopReason>) {
        self.inner.stop(reason.into());
    }

    /// Remove the listener from the client
    ///
    /// This is the teardown path for permanent collectors, which never
    /// unsubscribe on their own.
    ///
    /// # Returns
    ///
    /// `true` if a listener was still registered and has been removed
    pub fn detach(&self) -> bool {
        let listener = self.inner.state().listener.take();
        match listener {
            Some(id) => {
                debug!(message_id = %self.inner.target.message_id, "Detaching collector listener");
                self.inner.source.unsubscribe(id)
            }
            None => false,
        }
    }

    /// Register a callback invoked once per accepted reaction
    pub fn on_reacted<F>(&self, observer: F)
    where
        F: Fn(&CollectedReaction) + Send + Sync + 'static,
    {
        self.inner.state().reacted_observers.push(Arc::new(observer));
    }

    /// Register a callback invoked once when the collection ends
    ///
    /// If the collector has already ended, the callback runs immediately with
    /// the recorded outcome.
    pub fn on_end<F>(&self, observer: F)
    where
        F: FnOnce(&CollectionEnd) + Send + 'static,
    {
        let mut state = self.inner.state();
        match state.outcome.clone() {
            Some(outcome) => {
                drop(state);
                observer(&outcome);
            }
            None => state.end_observers.push(Box::new(observer)),
        }
    }

    /// Future resolving to the collection outcome
    ///
    /// The future does not keep the collection running by itself: only the
    /// collector's own triggers or an explicit stop end it.
    pub fn ended(&self) -> CollectionFuture {
        let (tx, rx) = oneshot::channel();
        self.on_end(move |outcome| {
            let _ = tx.send(outcome.clone());
        });
        CollectionFuture::pending(rx)
    }

    pub fn target(&self) -> MessageTarget {
        self.inner.target
    }

    pub fn options(&self) -> CollectOptions {
        self.inner.options
    }

    pub fn is_permanent(&self) -> bool {
        self.inner.permanent
    }

    pub fn is_ended(&self) -> bool {
        self.inner.is_ended()
    }

    /// Snapshot of the reactions accepted so far, in arrival order
    pub fn collected(&self) -> Vec<CollectedReaction> {
        self.inner.state().collected.clone()
    }
}

/// Future returned by [`ReactionCollector::ended`] and `collect_reactions`
#[must_use = "futures do nothing unless polled"]
#[derive(Debug)]
pub struct CollectionFuture {
    state: FutureState,
}

#[derive(Debug)]
enum FutureState {
    Pending(oneshot::Receiver<CollectionEnd>),
    Failed(Option<CollectorError>),
}

impl CollectionFuture {
    fn pending(rx: oneshot::Receiver<CollectionEnd>) -> Self {
        Self {
            state: FutureState::Pending(rx),
        }
    }

    pub(crate) fn failed(err: CollectorError) -> Self {
        Self {
            state: FutureState::Failed(Some(err)),
        }
    }
}

impl Future for CollectionFuture {
    type Output = Result<CollectionEnd, CollectorError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.state {
            FutureState::Pending(rx) => Pin::new(rx)
                .poll(cx)
                .map(|received| received.map_err(|_| CollectorError::Abandoned)),
            FutureState::Failed(err) => {
                Poll::Ready(Err(err.take().unwrap_or(CollectorError::Abandoned)))
            }
        }
    }
}

impl fmt::Debug for ReactionCollector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactionCollector")
            .field("target", &self.inner.target)
            .field("permanent", &self.inner.permanent)
            .field("options", &self.inner.options)
            .field("ended", &self.inner.is_ended())
            .finish_non_exhaustive()
    }
}

impl CollectorInner {
    fn state(&self) -> MutexGuard<'_, CollectorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_ended(&self) -> bool {
        self.ended.load(Ordering::Acquire)
    }

    fn handle_event(&self, event: &ReactionEvent) -> bool {
        if self.is_ended() {
            return false;
        }

        if event.message_id != self.target.message_id {
            trace!(
                message_id = %event.message_id,
                target_message_id = %self.target.message_id,
                "Ignoring reaction on another message"
            );
            return false;
        }

        if !(self.filter)(event.user_id) {
            debug!(
                message_id = %event.message_id,
                user_id = %event.user_id,
                "Reaction rejected by filter"
            );
            return false;
        }

        let record = CollectedReaction::from(event);

        let (observers, reached_max) = {
            let mut state = self.state();
            // A concurrent stop may have won since the first check
            if self.is_ended() {
                return false;
            }
            state.collected.push(record.clone());

            let reached_max = self
                .options
                .max_matches
                .is_some_and(|max| state.collected.len() >= max);
            if reached_max {
                self.ended.store(true, Ordering::Release);
            }

            debug!(
                message_id = %event.message_id,
                user_id = %event.user_id,
                emoji = %event.emoji,
                collected = state.collected.len(),
                "Reaction collected"
            );
            (state.reacted_observers.clone(), reached_max)
        };

        for observer in &observers {
            observer(&record);
        }

        if reached_max {
            self.finish(self.state(), StopReason::MaxMatches);
            return true;
        }
        false
    }

    fn stop(&self, reason: StopReason) {
        let state = self.state();
        if self.ended.swap(true, Ordering::AcqRel) {
            debug!(
                message_id = %self.target.message_id,
                %reason,
                "Collector already ended, ignoring stop"
            );
            return;
        }
        self.finish(state, reason);
    }

    /// Tear down after `ended` was claimed by the caller
    fn finish(&self, mut state: MutexGuard<'_, CollectorState>, reason: StopReason) {
        if let Some(timer) = state.timer.take() {
            timer.abort();
        }
        let listener = if self.permanent {
            None
        } else {
            state.listener.take()
        };

        let outcome = CollectionEnd {
            collected: state.collected.clone(),
            reason,
        };
        state.outcome = Some(outcome.clone());
        let observers = std::mem::take(&mut state.end_observers);
        drop(state);

        if let Some(id) = listener {
            self.source.unsubscribe(id);
        }

        info!(
            message_id = %self.target.message_id,
            reason = %outcome.reason,
            collected = outcome.collected.len(),
            permanent = self.permanent,
            "Reaction collector ended"
        );

        for observer in observers {
            observer(&outcome);
        }
    }
}
