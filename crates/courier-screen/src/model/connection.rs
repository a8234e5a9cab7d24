use super::time::DeliveryTime;
use serde::{Deserialize, Serialize};

/// Courier online/offline flag. Has no network effect by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

impl ConnectionState {
    pub const fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    pub const fn toggled(&self) -> Self {
        match self {
            ConnectionState::Disconnected => ConnectionState::Connected,
            ConnectionState::Connected => ConnectionState::Disconnected,
        }
    }
}

/// The connection sub-state of a ready screen: the flag plus the delivery-time counter
/// it resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Connection {
    state: ConnectionState,
    delivery_time: DeliveryTime,
}

impl Connection {
    pub const fn state(&self) -> ConnectionState {
        self.state
    }

    pub const fn delivery_time(&self) -> DeliveryTime {
        self.delivery_time
    }

    /// Flips the flag. Going offline zeroes the delivery time; going online leaves it
    /// alone.
    pub fn toggle(&mut self) -> ConnectionState {
        self.state = self.state.toggled();
        if !self.state.is_connected() {
            self.delivery_time.reset();
        }
        self.state
    }

    #[cfg(test)]
    pub(crate) fn with_delivery_time(state: ConnectionState, delivery_time: DeliveryTime) -> Self {
        Self {
            state,
            delivery_time,
        }
    }
}
