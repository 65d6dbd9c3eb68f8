// Trait definitions
pub mod client_resolver;
pub mod discord_service;
pub mod event_sender_trait;
pub mod event_source;

// Implementations
pub mod http_event_sender;
pub mod listener_registry;
pub mod serenity_discord_service;
pub mod shard_router;

// Re-exports for convenience
pub use client_resolver::ClientResolver;
pub use discord_service::DiscordService;
pub use event_sender_trait::EventSender;
pub use event_source::{ListenerId, REACTION_ADD_EVENT, ReactionEventSource, ReactionListener};
pub use http_event_sender::HttpEventSender;
pub use listener_registry::ListenerRegistry;
pub use serenity_discord_service::SerenityDiscordService;
pub use shard_router::ShardRouter;
