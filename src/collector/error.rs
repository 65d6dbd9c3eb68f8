use serenity::model::id::MessageId;
use thiserror::Error;

/// Errors raised while setting up or awaiting a collector
#[derive(Debug, Error)]
pub enum CollectorError {
    #[error("No client could be resolved for message {message_id}")]
    ClientUnresolved { message_id: MessageId },

    #[error("A timed collector must be created inside a tokio runtime")]
    NoRuntime,

    #[error("Invalid collector options: {reason}")]
    InvalidOptions { reason: String },

    #[error("Collector was dropped before it ended")]
    Abandoned,
}
