//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ScreenClient<T>`] whose mailbox is answered from a
//! queue of scripted responses instead of a running model. Use it to test the logic
//! *around* a client (wrappers, orchestration) deterministically.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **State** | No real state (scripted) | Real transitions |
//! | **Use Case** | Testing client wrappers | Testing the model or the full system |
//! | **Error Injection** | Easy (`return_err`) | Needs the state that triggers it |
//!
//! ## Testing Strategies
//!
//! 1. **Client wrapper test (pure mock)**: script responses with [`MockClient`], or
//!    inspect raw requests with [`create_mock_client`] + [`expect_dispatch`].
//! 2. **Model test**: call `handle_event` directly on a state value with fake collaborators.
//! 3. **Actor test**: spawn a real `ScreenActor` with fake collaborators in its context.
//! 4. **Full system test**: start the whole application and drive it through its client.
//!
//! ## Example
//!
//! ```rust
//! use screen_framework::mock::MockClient;
//! use screen_framework::{FrameworkError, ScreenModel};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug, Default)] struct Lamp { on: bool }
//! #[derive(Debug)] enum LampEvent { Flip }
//! #[derive(Debug, thiserror::Error)] #[error("lamp error")] struct LampError;
//!
//! #[async_trait]
//! impl ScreenModel for Lamp {
//!     type Event = LampEvent;
//!     type Outcome = bool;
//!     type Context = ();
//!     type Error = LampError;
//!     async fn handle_event(&mut self, _: LampEvent, _: &()) -> Result<bool, LampError> {
//!         Ok(true)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Lamp>::new();
//!     mock.expect_dispatch().return_ok(true);
//!     mock.expect_dispatch().return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert!(client.dispatch(LampEvent::Flip).await.unwrap());
//!     assert!(matches!(
//!         client.dispatch(LampEvent::Flip).await,
//!         Err(FrameworkError::ActorClosed)
//!     ));
//!     mock.verify();
//! }
//! ```

use crate::client::ScreenClient;
use crate::error::FrameworkError;
use crate::message::ScreenRequest;
use crate::model::ScreenModel;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted response for the next request the mock receives.
enum Expectation<T: ScreenModel> {
    Snapshot {
        response: Result<T, FrameworkError>,
    },
    Dispatch {
        response: Result<T::Outcome, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in the order they were registered. A request that does not
/// match the next expectation panics the background task, which the caller observes as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ScreenModel> {
    client: ScreenClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ScreenModel> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ScreenModel> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ScreenRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ScreenRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ScreenRequest::Dispatch {
                            event: _,
                            respond_to,
                        },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ScreenClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ScreenClient<T> {
        self.client.clone()
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<T> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: ScreenModel> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ScreenModel> SnapshotExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, state: T) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot { response: Ok(state) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<T: ScreenModel> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ScreenModel> DispatchExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, outcome: T::Outcome) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Ok(outcome),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Err(error),
        });
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiving end of its mailbox.
///
/// The test plays the actor: it reads requests off `receiver` with [`expect_dispatch`] or
/// [`expect_snapshot`], asserts on them, and answers through the responder.
pub fn create_mock_client<T: ScreenModel>(
    buffer_size: usize,
) -> (ScreenClient<T>, mpsc::Receiver<ScreenRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ScreenClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Dispatch request
pub async fn expect_dispatch<T: ScreenModel>(
    receiver: &mut mpsc::Receiver<ScreenRequest<T>>,
) -> Option<(
    T::Event,
    oneshot::Sender<Result<T::Outcome, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ScreenRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<T: ScreenModel>(
    receiver: &mut mpsc::Receiver<ScreenRequest<T>>,
) -> Option<oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(ScreenRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
