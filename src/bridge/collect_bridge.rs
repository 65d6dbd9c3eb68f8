use crate::adapters::{ClientResolver, DiscordService, EventSender};
use crate::bridge::collection_payload::CollectionPayload;
use crate::bridge::summary::{announcement, summarize};
use crate::collector::{CollectOptions, CollectionEnd, MessageTarget, collect_reactions};
use anyhow::Context as _;
use serenity::model::channel::Message;
use serenity::model::id::UserId;
use std::sync::Arc;
use tracing::{error, info};

/// Handler name used when forwarding finished collections
pub const COLLECTION_HANDLER: &str = "reaction_collect";

/// Runs a reaction collection for each collect command
pub struct CollectBridge<D, S>
where
    D: DiscordService,
    S: EventSender,
{
    discord_service: Arc<D>,
    event_sender: Option<Arc<S>>,
    command: String,
    options: CollectOptions,
}

impl<D, S> CollectBridge<D, S>
where
    D: DiscordService,
    S: EventSender,
{
    /// Create a new CollectBridge
    ///
    /// # Arguments
    ///
    /// * `discord_service` - The Discord service for replies
    /// * `event_sender` - Optional sender receiving every finished collection
    /// * `command` - Message content that starts a collection
    /// * `options` - Limits applied to every collection
    pub fn new(
        discord_service: Arc<D>,
        event_sender: Option<Arc<S>>,
        command: impl Into<String>,
        options: CollectOptions,
    ) -> Self {
        Self {
            discord_service,
            event_sender,
            command: command.into(),
            options,
        }
    }

    /// Whether a message starts a collection
    ///
    /// Messages from bots (including this one) never do.
    pub fn is_collect_command(&self, message: &Message) -> bool {
        !message.author.bot && message.content.trim() == self.command
    }

    /// Collect reactions on a command message and report the outcome
    ///
    /// The collector is subscribed before the acknowledgement is posted, so
    /// reactions added right away are not missed. Reactions from `self_id` are
    /// ignored. Failures to reply or forward are logged; only a failure to
    /// collect is returned.
    pub async fn run_collection<R>(
        &self,
        http: &serenity::http::Http,
        resolver: &R,
        message: &Message,
        self_id: UserId,
    ) -> anyhow::Result<CollectionEnd>
    where
        R: ClientResolver + ?Sized,
    {
        let target = MessageTarget::from(message);
        let pending = collect_reactions(resolver, target, move |user| user != self_id, self.options);

        if let Err(err) = self
            .discord_service
            .reply_to_message(http, target.channel_id, target.message_id, &announcement(&self.options))
            .await
        {
            error!(?err, message_id = %target.message_id, "Failed to acknowledge collect command");
        }

        let end = pending.await.context("Failed to collect reactions")?;

        info!(
            message_id = %target.message_id,
            reason = %end.reason,
            collected = end.collected.len(),
            "Collection finished"
        );

        if let Err(err) = self
            .discord_service
            .reply_to_message(http, target.channel_id, target.message_id, &summarize(&end))
            .await
        {
            error!(?err, message_id = %target.message_id, "Failed to post collection summary");
        }

        if let Some(sender) = &self.event_sender {
            let payload = CollectionPayload::new(target, &end);
            if let Err(err) = sender
                .send(COLLECTION_HANDLER, &payload)
                .await
                .context("Failed to send collection to HTTP endpoint")
            {
                error!(?err, message_id = %target.message_id, "Failed to forward collection");
            }
        }

        Ok(end)
    }
}
