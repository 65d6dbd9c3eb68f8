use crate::collector::{CollectionEnd, MessageTarget};
use serde::Serialize;

/// Payload for finished collections sent to the HTTP endpoint
///
/// # JSON Structure
///
/// ```json
/// {
///   "message": { "message_id": "...", "channel_id": "...", "guild_id": "..." },
///   "collected": [ { "message": { ... }, "emoji": { ... }, "user_id": "..." } ],
///   "reason": "time"
/// }
/// ```
#[derive(Serialize)]
pub struct CollectionPayload<'a> {
    pub message: MessageTarget,
    #[serde(flatten)]
    pub end: &'a CollectionEnd,
}

impl<'a> CollectionPayload<'a> {
    pub fn new(message: MessageTarget, end: &'a CollectionEnd) -> Self {
        Self { message, end }
    }
}
