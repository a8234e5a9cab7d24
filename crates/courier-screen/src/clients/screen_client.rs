//! # Courier Screen Client
//!
//! High-level API for the screen actor. It wraps a `ScreenClient<ScreenState>` and
//! exposes one method per screen input.
use crate::location::LocationOutcome;
use crate::model::{ConnectionState, Region, ScreenState};
use crate::ping::LocationPing;
use crate::screen_actor::{ScreenError, ScreenEvent, ScreenOutcome};
use crate::view::ScreenView;
use async_trait::async_trait;
use screen_framework::{FrameworkError, ScreenClient, ScreenHandle};
use tracing::{debug, instrument};

/// Client for interacting with the screen actor.
#[derive(Clone)]
pub struct CourierScreenClient {
    inner: ScreenClient<ScreenState>,
}

impl CourierScreenClient {
    pub fn new(inner: ScreenClient<ScreenState>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ScreenHandle<ScreenState> for CourierScreenClient {
    type Error = ScreenError;

    fn inner(&self) -> &ScreenClient<ScreenState> {
        &self.inner
    }

    /// Rejections from the screen itself come back as the same [`ScreenError`];
    /// everything else is a communication failure.
    fn map_error(e: FrameworkError) -> ScreenError {
        match e {
            FrameworkError::ModelError(inner) => match inner.downcast::<ScreenError>() {
                Ok(screen_error) => *screen_error,
                Err(other) => ScreenError::ActorCommunication(other.to_string()),
            },
            other => ScreenError::ActorCommunication(other.to_string()),
        }
    }
}

fn unexpected(outcome: ScreenOutcome) -> ScreenError {
    ScreenError::ActorCommunication(format!("Unexpected outcome: {outcome:?}"))
}

impl CourierScreenClient {
    #[instrument(skip(self))]
    pub async fn resolve_location(&self, outcome: LocationOutcome) -> Result<Region, ScreenError> {
        match self.dispatch(ScreenEvent::LocationResolved(outcome)).await? {
            ScreenOutcome::Ready(region) => Ok(region),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn toggle_connection(&self) -> Result<ConnectionState, ScreenError> {
        match self.dispatch(ScreenEvent::ToggleConnection).await? {
            ScreenOutcome::Connection(state) => Ok(state),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn select_marker(&self, id: u32) -> Result<Region, ScreenError> {
        match self.dispatch(ScreenEvent::SelectMarker(id)).await? {
            ScreenOutcome::Focused(region) => Ok(region),
            other => Err(unexpected(other)),
        }
    }

    /// Starts a location ping and returns what is being sent. The send result arrives
    /// later as an alert.
    #[instrument(skip(self))]
    pub async fn send_location_ping(&self) -> Result<LocationPing, ScreenError> {
        match self.dispatch(ScreenEvent::SendPing).await? {
            ScreenOutcome::PingDispatched(ping) => Ok(ping),
            other => Err(unexpected(other)),
        }
    }

    pub async fn state(&self) -> Result<ScreenState, ScreenError> {
        self.snapshot().await
    }

    #[instrument(skip(self))]
    pub async fn view(&self) -> Result<ScreenView, ScreenError> {
        debug!("Rendering view");
        let state = self.snapshot().await?;
        Ok(ScreenView::render(&state))
    }
}
