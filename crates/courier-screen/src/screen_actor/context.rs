use crate::config::ScreenConfig;
use crate::model::{Span, MARKER_FOCUS_SPAN};
use crate::ping::{PingTransport, PING_MESSAGE};
use crate::services::{MapView, Notifier};
use std::sync::Arc;

/// Collaborators the screen actor reaches out to while applying events.
#[derive(Clone)]
pub struct ScreenContext {
    pub notifier: Arc<dyn Notifier>,
    pub map_view: Arc<dyn MapView>,
    pub transport: Arc<dyn PingTransport>,
    pub ping_message: String,
    pub focus_span: Span,
}

impl ScreenContext {
    pub fn new(
        notifier: Arc<dyn Notifier>,
        map_view: Arc<dyn MapView>,
        transport: Arc<dyn PingTransport>,
    ) -> Self {
        Self {
            notifier,
            map_view,
            transport,
            ping_message: PING_MESSAGE.to_string(),
            focus_span: MARKER_FOCUS_SPAN,
        }
    }

    /// Takes the ping message and focus span from `config`.
    pub fn with_config(mut self, config: &ScreenConfig) -> Self {
        self.ping_message = config.ping_message.clone();
        self.focus_span = config.focus_span;
        self
    }
}
