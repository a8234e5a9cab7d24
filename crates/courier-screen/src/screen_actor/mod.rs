//! # Screen Actor
//!
//! Owns the [`ScreenState`] and applies [`ScreenEvent`]s to it one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ScreenModel`](screen_framework::ScreenModel) implementation for [`ScreenState`]
//! - [`events`] - [`ScreenEvent`] and [`ScreenOutcome`]
//! - [`context`] - [`ScreenContext`], the collaborators injected at `run()` time
//! - [`error`] - [`ScreenError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use courier_screen::screen_actor::{self, ScreenContext};
//! use courier_screen::model::ScreenState;
//! use courier_screen::services::{AlertLog, MapFocusLog, RecordingTransport};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = screen_actor::new(ScreenState::default(), 32);
//!     let context = ScreenContext::new(
//!         Arc::new(AlertLog::new()),
//!         Arc::new(MapFocusLog::new()),
//!         Arc::new(RecordingTransport::succeeding()),
//!     );
//!     tokio::spawn(actor.run(context));
//!
//!     let state = client.state().await.unwrap();
//!     assert!(state.is_loading());
//! }
//! ```

pub mod context;
pub mod entity;
pub mod error;
pub mod events;

pub use context::*;
pub use error::*;
pub use events::*;

use crate::clients::CourierScreenClient;
use crate::model::ScreenState;
use screen_framework::ScreenActor;

/// Creates a new screen actor holding `state`, and its client.
pub fn new(state: ScreenState, capacity: usize) -> (ScreenActor<ScreenState>, CourierScreenClient) {
    let (actor, generic_client) = ScreenActor::new(state, capacity);
    let client = CourierScreenClient::new(generic_client);

    (actor, client)
}
