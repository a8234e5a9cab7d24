use super::{LocationPing, PingError};
use async_trait::async_trait;
use tracing::debug;

/// Delivers a [`LocationPing`] to the notification server.
#[async_trait]
pub trait PingTransport: Send + Sync {
    async fn post(&self, ping: &LocationPing) -> Result<(), PingError>;
}

/// JSON-over-HTTP transport. No authentication, the response body is ignored.
#[derive(Debug, Clone)]
pub struct HttpPingTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPingTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PingTransport for HttpPingTransport {
    async fn post(&self, ping: &LocationPing) -> Result<(), PingError> {
        debug!(endpoint = %self.endpoint, "Posting location ping");
        let response = self
            .client
            .post(&self.endpoint)
            .json(ping)
            .send()
            .await
            .map_err(|e| {
                PingError::NetworkSendFailure(format!("{}: request error: {e}", self.endpoint))
            })?;

        if !response.status().is_success() {
            return Err(PingError::NetworkSendFailure(format!(
                "{}: HTTP {}",
                self.endpoint,
                response.status()
            )));
        }
        Ok(())
    }
}
