//! # Location Ping
//!
//! Fire-and-forget report of the courier's current coordinate to the notification
//! server. The outcome is only ever shown as an alert; it never feeds back into the
//! screen state.

pub mod error;
pub mod transport;

pub use error::*;
pub use transport::*;

use crate::model::Coordinate;
use crate::services::{Alert, Notifier};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Message sent with every ping.
pub const PING_MESSAGE: &str = "Hello world";

/// Default notification endpoint.
pub const PING_ENDPOINT: &str = "http://192.168.18.247:8000/api/send-message";

/// JSON body of a location ping: `{"message", "latitude", "longitude"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationPing {
    pub message: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationPing {
    pub fn new(message: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            message: message.into(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        }
    }

    pub fn hello(coordinate: Coordinate) -> Self {
        Self::new(PING_MESSAGE, coordinate)
    }
}

pub(crate) fn success_alert() -> Alert {
    Alert::new("Success", "Location sent successfully!")
}

pub(crate) fn failure_alert() -> Alert {
    Alert::new("Error", "Failed to send location.")
}

/// Sends `ping` on a detached task and alerts the result.
///
/// Each call is independent: no retry and no de-duplication.
pub fn dispatch_ping(
    transport: Arc<dyn PingTransport>,
    notifier: Arc<dyn Notifier>,
    ping: LocationPing,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        match transport.post(&ping).await {
            Ok(()) => {
                info!(
                    latitude = ping.latitude,
                    longitude = ping.longitude,
                    "Location ping sent"
                );
                notifier.alert(success_alert());
            }
            Err(e) => {
                error!(error = %e, "Location ping failed");
                notifier.alert(failure_alert());
            }
        }
    })
}
