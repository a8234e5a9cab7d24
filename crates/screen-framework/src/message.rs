//! # Mailbox Messages
//!
//! The envelope sent from a [`ScreenClient`](crate::ScreenClient) to a
//! [`ScreenActor`](crate::ScreenActor).

use crate::error::FrameworkError;
use crate::model::ScreenModel;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// There are only two things a caller can do with a screen: look at it, or make something
/// happen to it.
///
/// - **Snapshot**: returns a clone of the current state.
/// - **Dispatch**: applies one [`ScreenModel::Event`] and returns its
///   [`ScreenModel::Outcome`].
#[derive(Debug)]
pub enum ScreenRequest<T: ScreenModel> {
    Snapshot {
        respond_to: Response<T>,
    },
    Dispatch {
        event: T::Event,
        respond_to: Response<T::Outcome>,
    },
}
