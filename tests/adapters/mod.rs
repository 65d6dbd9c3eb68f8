// Mock implementations for adapter layer testing

pub mod mock_discord;
pub mod mock_event_sender;
pub mod mock_event_source;
pub mod mock_reaction;

#[allow(unused_imports)]
pub use mock_discord::MockDiscordService;
#[allow(unused_imports)]
pub use mock_event_sender::MockEventSender;
#[allow(unused_imports)]
pub use mock_event_source::MockEventSource;
#[allow(unused_imports)]
pub use mock_reaction::MockReactionBuilder;
