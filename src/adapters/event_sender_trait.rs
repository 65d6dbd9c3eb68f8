use serde::Serialize;
use serenity::async_trait;

/// Interface for forwarding collection results to an external endpoint
#[async_trait]
pub trait EventSender: Send + Sync {
    /// Send a payload
    ///
    /// # Arguments
    ///
    /// * `handler` - Handler name (e.g., "reaction_collect")
    /// * `payload` - Payload to send (serialized as JSON)
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The endpoint accepted the payload
    /// * `Err(_)` - Sending failed or the endpoint returned an error status
    async fn send<T: Serialize + Send + Sync>(
        &self,
        handler: &str,
        payload: &T,
    ) -> anyhow::Result<()>;
}
