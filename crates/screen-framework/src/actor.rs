//! # Screen Actor
//!
//! The server half of the framework: owns the state and the receiving end of the mailbox.

use crate::client::ScreenClient;
use crate::error::FrameworkError;
use crate::message::ScreenRequest;
use crate::model::ScreenModel;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a single screen-state value.
///
/// # Concurrency Model
///
/// The actor processes its mailbox *sequentially*. Only the actor task ever touches
/// `state`, so no `Mutex` or `RwLock` is needed and two events can never interleave.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ScreenActor::new(initial_state, capacity)` returns the actor and a client.
/// 2.  **Wire**: pass the collaborators into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use screen_framework::{ScreenActor, ScreenModel};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)]
/// struct Lamp { on: bool }
/// #[derive(Debug)] enum LampEvent { Flip }
/// #[derive(Debug, thiserror::Error)] #[error("lamp error")] struct LampError;
///
/// #[async_trait]
/// impl ScreenModel for Lamp {
///     type Event = LampEvent;
///     type Outcome = bool;
///     type Context = ();
///     type Error = LampError;
///
///     async fn handle_event(&mut self, _: LampEvent, _: &()) -> Result<bool, LampError> {
///         self.on = !self.on;
///         Ok(self.on)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ScreenActor::new(Lamp::default(), 8);
///     tokio::spawn(actor.run(()));
///
///     assert!(client.dispatch(LampEvent::Flip).await.unwrap());
///     assert!(client.snapshot().await.unwrap().on);
/// }
/// ```
pub struct ScreenActor<T: ScreenModel> {
    receiver: mpsc::Receiver<ScreenRequest<T>>,
    state: T,
}

impl<T: ScreenModel> ScreenActor<T> {
    /// Creates a new `ScreenActor` holding `initial` and its associated `ScreenClient`.
    ///
    /// `buffer_size` is the mailbox capacity. When it is full, client calls wait for space.
    /// A capacity of 0 is raised to 1.
    pub fn new(initial: T, buffer_size: usize) -> (Self, ScreenClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            state: initial,
        };
        let client = ScreenClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is handed to every hook, so collaborators can be built after the actor
    /// but before the loop starts.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "ScreenState" instead of the full path)
        let model_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(model_type, "Actor started");

        if let Err(e) = self.state.on_start(&context).await {
            warn!(model_type, error = %e, "on_start failed");
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ScreenRequest::Snapshot { respond_to } => {
                    debug!(model_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
                ScreenRequest::Dispatch { event, respond_to } => {
                    debug!(model_type, ?event, "Dispatch");
                    let result = self
                        .state
                        .handle_event(event, &context)
                        .await
                        .map_err(|e| FrameworkError::ModelError(Box::new(e)));
                    match &result {
                        Ok(outcome) => info!(model_type, ?outcome, "Event applied"),
                        Err(e) => warn!(model_type, error = %e, "Event rejected"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        self.state.on_stop(&context).await;
        info!(model_type, "Shutdown");
    }
}
