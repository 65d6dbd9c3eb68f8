use super::event_sender_trait::EventSender;
use anyhow::Context as _;
use serde::Serialize;
use serenity::async_trait;
use std::time::Duration;
use tracing::info;
use url::Url;

/// Implementation for sending events via HTTP
pub struct HttpEventSender {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpEventSender {
    /// Create a new HttpEventSender
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The HTTP endpoint URL
    /// * `insecure_mode` - If true, accept invalid TLS certificates
    /// * `timeout` - Overall request timeout
    pub fn new(endpoint: Url, insecure_mode: bool, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .danger_accept_invalid_certs(insecure_mode)
            .timeout(timeout)
            .build()
            .context("Building HTTP Client")?;

        Ok(Self { client, endpoint })
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EventSender for HttpEventSender {
    async fn send<T: Serialize + Send + Sync>(
        &self,
        handler: &str,
        payload: &T,
    ) -> anyhow::Result<()> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .query(&[("handler", handler)])
            .json(payload)
            .send()
            .await
            .context("Sending request to HTTP endpoint")?;

        let status = response.status();
        response
            .error_for_status()
            .with_context(|| format!("HTTP endpoint returned {status}"))?;

        info!(%status, %handler, "Forwarded event to HTTP endpoint");
        Ok(())
    }
}
