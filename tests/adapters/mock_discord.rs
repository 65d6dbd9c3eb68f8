use reactgate::adapters::DiscordService;
use serenity::async_trait;
use serenity::model::id::{ChannelId, MessageId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

pub struct MockDiscordService {
    pub replies: Arc<Mutex<Vec<RecordedReply>>>,
    fail: AtomicBool,
}

#[derive(Debug, Clone)]
pub struct RecordedReply {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub content: String,
}

impl Default for MockDiscordService {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MockDiscordService {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            fail: AtomicBool::new(false),
        }
    }

    /// Make every reply fail (replies are still recorded)
    pub fn failing() -> Self {
        let service = Self::new();
        service.fail.store(true, Ordering::SeqCst);
        service
    }

    pub fn get_replies(&self) -> Vec<RecordedReply> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl DiscordService for MockDiscordService {
    async fn reply_to_message(
        &self,
        _http: &serenity::http::Http,
        channel_id: ChannelId,
        message_id: MessageId,
        content: &str,
    ) -> Result<(), serenity::Error> {
        self.replies.lock().unwrap().push(RecordedReply {
            channel_id,
            message_id,
            content: content.to_string(),
        });
        if self.fail.load(Ordering::SeqCst) {
            return Err(serenity::Error::Other("mock reply failure"));
        }
        Ok(())
    }
}
