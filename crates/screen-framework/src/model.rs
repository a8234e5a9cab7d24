//! # Screen Model
//!
//! The contract a state type fulfils to be owned by a [`ScreenActor`](crate::ScreenActor).

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that a screen-state type implements to be driven by a `ScreenActor`.
///
/// # Associated Types
///
/// - `Event`: everything that can happen to the screen (callbacks, button presses).
/// - `Outcome`: what applying an event reports back to the caller.
/// - `Context`: collaborators injected at `run()` time (notifier, map view, transports).
///   Use `()` if the model needs none.
/// - `Error`: why an event was rejected. The state must be left untouched when an event
///   is rejected.
///
/// # Hooks
///
/// [`ScreenModel::on_start`] and [`ScreenModel::on_stop`] have default implementations
/// that do nothing.
#[async_trait]
pub trait ScreenModel: Clone + Send + Sync + 'static {
    type Event: Send + Sync + Debug;

    type Outcome: Send + Sync + Debug;

    type Context: Send + Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once before the first event is applied.
    async fn on_start(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies one event to the state.
    async fn handle_event(
        &mut self,
        event: Self::Event,
        ctx: &Self::Context,
    ) -> Result<Self::Outcome, Self::Error>;

    /// Called once after the mailbox closes.
    async fn on_stop(&self, _ctx: &Self::Context) {}
}
