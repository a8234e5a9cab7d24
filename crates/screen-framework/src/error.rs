//! # Framework Errors
//!
//! Errors raised by the runtime itself, as opposed to a model rejecting an event.

/// Errors that can occur within the screen framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    /// The model rejected the event. The boxed value is the model's own `Error` type and
    /// can be recovered with `downcast`.
    #[error("Model error: {0}")]
    ModelError(Box<dyn std::error::Error + Send + Sync>),
}
