use serde::Serialize;
use serenity::model::channel::Message;
use serenity::model::id::{ChannelId, GuildId, MessageId};

/// Identity of the message a collector is bound to.
///
/// Only identifying fields are kept. The `guild_id` decides how the owning
/// client is resolved:
/// - `Some(guild_id)`: routed through the guild's shard
/// - `None`: direct message channel, resolved directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MessageTarget {
    pub message_id: MessageId,
    pub channel_id: ChannelId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<GuildId>,
}

impl MessageTarget {
    /// Create a target for a message in a direct channel
    pub fn new(message_id: MessageId, channel_id: ChannelId) -> Self {
        Self {
            message_id,
            channel_id,
            guild_id: None,
        }
    }

    /// Create a target for a message in a guild channel
    pub fn in_guild(message_id: MessageId, channel_id: ChannelId, guild_id: GuildId) -> Self {
        Self {
            message_id,
            channel_id,
            guild_id: Some(guild_id),
        }
    }

    /// Whether the message lives in a direct (non-guild) channel
    pub fn is_direct(&self) -> bool {
        self.guild_id.is_none()
    }
}

impl From<&Message> for MessageTarget {
    fn from(message: &Message) -> Self {
        Self {
            message_id: message.id,
            channel_id: message.channel_id,
            guild_id: message.guild_id,
        }
    }
}

impl From<&MessageTarget> for MessageTarget {
    fn from(target: &MessageTarget) -> Self {
        *target
    }
}
