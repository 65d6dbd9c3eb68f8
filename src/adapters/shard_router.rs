use super::client_resolver::ClientResolver;
use super::event_source::ReactionEventSource;
use super::listener_registry::ListenerRegistry;
use crate::collector::{MessageTarget, ReactionEvent};
use serenity::model::id::GuildId;
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-shard listener registries for an (auto)sharded client
///
/// Guild messages resolve through the shard owning the guild. Direct messages
/// are always delivered on shard 0 and resolve to it.
pub struct ShardRouter {
    shards: Vec<Arc<ListenerRegistry>>,
}

impl ShardRouter {
    /// Create a router with `shard_count` empty registries
    pub fn new(shard_count: u32) -> Self {
        let shards = (0..shard_count)
            .map(|_| Arc::new(ListenerRegistry::new()))
            .collect();
        Self { shards }
    }

    pub fn shard_count(&self) -> u32 {
        self.shards.len() as u32
    }

    /// Shard owning a guild: `(guild_id >> 22) % shard_count`
    pub fn shard_for_guild(&self, guild_id: GuildId) -> Option<u32> {
        let count = u64::from(self.shard_count());
        if count == 0 {
            return None;
        }
        Some(((guild_id.get() >> 22) % count) as u32)
    }

    /// Registry of a shard, if it exists
    pub fn shard(&self, shard_id: u32) -> Option<&Arc<ListenerRegistry>> {
        self.shards.get(shard_id as usize)
    }

    /// Deliver a gateway event received on `shard_id`
    ///
    /// # Returns
    ///
    /// Number of listeners invoked (0 for unknown shards)
    pub fn dispatch(&self, shard_id: u32, event: &ReactionEvent) -> usize {
        match self.shard(shard_id) {
            Some(registry) => registry.dispatch(event),
            None => {
                warn!(
                    shard_id,
                    shard_count = self.shard_count(),
                    message_id = %event.message_id,
                    "Reaction event received on unknown shard"
                );
                0
            }
        }
    }
}

impl ClientResolver for ShardRouter {
    fn resolve(&self, message: &MessageTarget) -> Option<Arc<dyn ReactionEventSource>> {
        let shard_id = match message.guild_id {
            Some(guild_id) => self.shard_for_guild(guild_id)?,
            None => 0,
        };

        debug!(
            message_id = %message.message_id,
            guild_id = ?message.guild_id,
            shard_id,
            "Resolved owning shard"
        );

        self.shard(shard_id)
            .map(|registry| registry.clone() as Arc<dyn ReactionEventSource>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serenity::model::id::{ChannelId, MessageId};

    #[rstest]
    #[case::single_shard(1, 41771983423143937, 0)]
    #[case::two_shards(2, 41771983423143937, 41771983423143937 >> 22 & 1)]
    #[case::shard_from_timestamp_bits(4, 5 << 22, 1)]
    fn test_shard_for_guild(#[case] shard_count: u32, #[case] guild_id: u64, #[case] expected: u64) {
        let router = ShardRouter::new(shard_count);

        assert_eq!(
            router.shard_for_guild(GuildId::new(guild_id)),
            Some(expected as u32)
        );
    }

    #[test]
    fn test_direct_message_resolves_to_shard_zero() {
        let router = ShardRouter::new(3);
        let target = MessageTarget::new(MessageId::new(1), ChannelId::new(2));

        let source = router.resolve(&target).expect("direct messages resolve");
        source.subscribe(Arc::new(|_| {}));

        assert_eq!(router.shard(0).unwrap().len(), 1);
        assert!(router.shard(1).unwrap().is_empty());
        assert!(router.shard(2).unwrap().is_empty());
    }

    #[test]
    fn test_router_without_shards_resolves_nothing() {
        let router = ShardRouter::new(0);
        let direct = MessageTarget::new(MessageId::new(1), ChannelId::new(2));
        let guild = MessageTarget::in_guild(MessageId::new(1), ChannelId::new(2), GuildId::new(3));

        assert!(router.resolve(&direct).is_none());
        assert!(router.resolve(&guild).is_none());
    }

    #[test]
    fn test_dispatch_to_unknown_shard_is_ignored() {
        let router = ShardRouter::new(1);
        let event = ReactionEvent::new(
            MessageTarget::new(MessageId::new(1), ChannelId::new(2)),
            serenity::model::channel::ReactionType::Unicode("👍".to_string()),
            serenity::model::id::UserId::new(3),
        );

        assert_eq!(router.dispatch(7, &event), 0);
    }
}
