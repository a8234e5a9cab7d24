use crate::error::FrameworkError;
use crate::message::ScreenRequest;
use crate::model::ScreenModel;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ScreenActor`.
///
/// Holds only the mailbox sender, so cloning is cheap and clones can be handed to every
/// event source (callbacks, buttons, background tasks).
#[derive(Clone)]
pub struct ScreenClient<T: ScreenModel> {
    sender: mpsc::Sender<ScreenRequest<T>>,
}

impl<T: ScreenModel> ScreenClient<T> {
    pub fn new(sender: mpsc::Sender<ScreenRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn snapshot(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn dispatch(&self, event: T::Event) -> Result<T::Outcome, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ScreenRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
