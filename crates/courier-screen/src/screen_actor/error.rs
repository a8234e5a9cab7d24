//! Error types for the screen actor.

use thiserror::Error;

/// Why the screen rejected an event.
///
/// A rejected event leaves the screen state exactly as it was.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScreenError {
    /// The event needs a map, but the screen is still loading.
    #[error("Screen is still loading")]
    NotReady,

    /// The location was already resolved; it is resolved once per screen.
    #[error("Location already resolved")]
    AlreadyResolved,

    #[error("Unknown marker: {0}")]
    UnknownMarker(u32),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

