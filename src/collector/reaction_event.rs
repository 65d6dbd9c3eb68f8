use serde::Serialize;
use serenity::model::channel::{Reaction, ReactionType};
use serenity::model::id::{ChannelId, GuildId, MessageId, UserId};

use super::message_target::MessageTarget;

/// A "reaction added" event, normalized at the gateway boundary
///
/// The gateway reports the reacting user either as a bare `user_id` or through an
/// attached guild member. Both shapes are folded into `user_id` before any
/// collector sees the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    pub message_id: MessageId,
    pub channel_id: ChannelId,
    pub guild_id: Option<GuildId>,
    pub emoji: ReactionType,
    pub user_id: UserId,
}

impl ReactionEvent {
    pub fn new(message: MessageTarget, emoji: ReactionType, user_id: UserId) -> Self {
        Self {
            message_id: message.message_id,
            channel_id: message.channel_id,
            guild_id: message.guild_id,
            emoji,
            user_id,
        }
    }

    /// Normalize a serenity reaction
    ///
    /// Returns `None` when the reaction carries no user at all.
    pub fn from_reaction(reaction: &Reaction) -> Option<Self> {
        let user_id = reaction
            .user_id
            .or_else(|| reaction.member.as_ref().map(|member| member.user.id))?;

        Some(Self {
            message_id: reaction.message_id,
            channel_id: reaction.channel_id,
            guild_id: reaction.guild_id,
            emoji: reaction.emoji.clone(),
            user_id,
        })
    }

    /// The message this reaction was added to
    pub fn message(&self) -> MessageTarget {
        MessageTarget {
            message_id: self.message_id,
            channel_id: self.channel_id,
            guild_id: self.guild_id,
        }
    }
}

/// One reaction accepted by a collector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectedReaction {
    pub message: MessageTarget,
    pub emoji: ReactionType,
    pub user_id: UserId,
}

impl From<&ReactionEvent> for CollectedReaction {
    fn from(event: &ReactionEvent) -> Self {
        Self {
            message: event.message(),
            emoji: event.emoji.clone(),
            user_id: event.user_id,
        }
    }
}
