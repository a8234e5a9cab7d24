use crate::ping::{LocationPing, PingError, PingTransport};
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory ping transport that records what it was asked to send.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    failure: Option<String>,
    sent: Mutex<Vec<LocationPing>>,
}

impl RecordingTransport {
    /// Accepts every ping.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// Rejects every ping with `reason`, as an unreachable server would.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every ping attempted so far, including rejected ones.
    pub fn sent(&self) -> Vec<LocationPing> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl PingTransport for RecordingTransport {
    async fn post(&self, ping: &LocationPing) -> Result<(), PingError> {
        self.sent
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(ping.clone());
        match &self.failure {
            Some(reason) => Err(PingError::NetworkSendFailure(reason.clone())),
            None => Ok(()),
        }
    }
}
