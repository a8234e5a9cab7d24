use std::sync::Mutex;
use tokio::sync::Notify;
use tracing::info;

/// A modal notification shown to the courier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Host-side alert dialog.
pub trait Notifier: Send + Sync {
    fn alert(&self, alert: Alert);
}

/// Notifier that logs every alert and keeps it for later inspection.
#[derive(Debug, Default)]
pub struct AlertLog {
    alerts: Mutex<Vec<Alert>>,
    changed: Notify,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every alert raised so far, oldest first.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Waits until at least `count` alerts have been raised and returns them.
    ///
    /// Alerts raised from background tasks (location pings) arrive at an unknown time;
    /// callers that care should wrap this in `tokio::time::timeout`.
    pub async fn wait_for(&self, count: usize) -> Vec<Alert> {
        loop {
            let notified = self.changed.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            let alerts = self.alerts();
            if alerts.len() >= count {
                return alerts;
            }
            notified.await;
        }
    }
}

impl Notifier for AlertLog {
    fn alert(&self, alert: Alert) {
        info!(title = %alert.title, message = %alert.message, "Alert");
        self.alerts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(alert);
        self.changed.notify_waiters();
    }
}
