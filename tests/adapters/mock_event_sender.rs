use reactgate::adapters::EventSender;
use serde::Serialize;
use serenity::async_trait;
use std::sync::{Arc, Mutex};

pub struct MockEventSender {
    pub sent_events: Arc<Mutex<Vec<SentEvent>>>,
}

#[derive(Debug, Clone)]
pub struct SentEvent {
    pub handler: String,
    pub payload: serde_json::Value,
}

impl Default for MockEventSender {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl MockEventSender {
    pub fn new() -> Self {
        Self {
            sent_events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_sent_events(&self) -> Vec<SentEvent> {
        self.sent_events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSender for MockEventSender {
    async fn send<T: Serialize + Send + Sync>(
        &self,
        handler: &str,
        payload: &T,
    ) -> anyhow::Result<()> {
        let payload = serde_json::to_value(payload)?;
        self.sent_events.lock().unwrap().push(SentEvent {
            handler: handler.to_string(),
            payload,
        });
        Ok(())
    }
}
