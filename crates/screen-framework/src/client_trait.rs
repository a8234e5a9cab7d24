use crate::{FrameworkError, ScreenClient, ScreenModel};
use async_trait::async_trait;

/// Trait for domain-specific screen clients to inherit the standard operations.
///
/// A wrapper only has to say where its inner [`ScreenClient`] is and how framework errors
/// map into its own error type; `snapshot` and `dispatch` then come for free.
///
/// # Example
///
/// ```rust
/// use screen_framework::{FrameworkError, ScreenClient, ScreenHandle, ScreenModel};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug, Default)] struct Counter { hits: u32 }
/// #[derive(Debug)] enum CounterEvent { Hit }
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct CounterError(String);
///
/// #[async_trait]
/// impl ScreenModel for Counter {
///     type Event = CounterEvent;
///     type Outcome = u32;
///     type Context = ();
///     type Error = CounterError;
///
///     async fn handle_event(&mut self, _: CounterEvent, _: &()) -> Result<u32, CounterError> {
///         self.hits += 1;
///         Ok(self.hits)
///     }
/// }
///
/// struct CounterClient { inner: ScreenClient<Counter> }
///
/// #[async_trait]
/// impl ScreenHandle<Counter> for CounterClient {
///     type Error = CounterError;
///
///     fn inner(&self) -> &ScreenClient<Counter> { &self.inner }
///
///     fn map_error(e: FrameworkError) -> CounterError { CounterError(e.to_string()) }
/// }
///
/// async fn usage(client: CounterClient) {
///     // snapshot() and dispatch() are provided automatically!
///     let _ = client.dispatch(CounterEvent::Hit).await;
///     let _ = client.snapshot().await;
/// }
/// ```
#[async_trait]
pub trait ScreenHandle<T: ScreenModel>: Send + Sync {
    /// The screen-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ScreenClient.
    fn inner(&self) -> &ScreenClient<T>;

    /// Map framework errors to the screen-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }

    /// Apply one event and return its outcome.
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, event: T::Event) -> Result<T::Outcome, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().dispatch(event).await.map_err(Self::map_error)
    }
}
