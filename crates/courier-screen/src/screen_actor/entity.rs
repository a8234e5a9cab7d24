//! ScreenModel trait implementation for the courier screen state.
//!
//! See the trait implementation on [`ScreenState`] for the transitions.

use super::{ScreenContext, ScreenError, ScreenEvent, ScreenOutcome};
use crate::location::LocationOutcome;
use crate::model::{Region, ScreenPhase, ScreenState};
use crate::ping::{dispatch_ping, LocationPing};
use async_trait::async_trait;
use screen_framework::ScreenModel;
use tracing::debug;

impl ScreenState {
    fn ready_region(&self) -> Result<Region, ScreenError> {
        self.location().ok_or(ScreenError::NotReady)
    }

    fn resolve(
        &mut self,
        outcome: LocationOutcome,
        ctx: &ScreenContext,
    ) -> Result<Region, ScreenError> {
        if !self.is_loading() {
            return Err(ScreenError::AlreadyResolved);
        }

        let region = outcome.region();
        self.phase = ScreenPhase::Ready(region);
        self.source = Some(outcome.source());
        if let Some(cause) = outcome.cause() {
            ctx.notifier.alert(cause.alert());
        }
        Ok(region)
    }
}

#[async_trait]
impl ScreenModel for ScreenState {
    type Event = ScreenEvent;
    type Outcome = ScreenOutcome;
    type Context = ScreenContext;
    type Error = ScreenError;

    /// Applies one screen event.
    ///
    /// Everything except `LocationResolved` needs a ready screen. Validation happens
    /// before any mutation, so a rejected event leaves the state untouched.
    async fn handle_event(
        &mut self,
        event: ScreenEvent,
        ctx: &ScreenContext,
    ) -> Result<ScreenOutcome, ScreenError> {
        match event {
            ScreenEvent::LocationResolved(outcome) => {
                self.resolve(outcome, ctx).map(ScreenOutcome::Ready)
            }
            ScreenEvent::ToggleConnection => {
                self.ready_region()?;
                let state = self.connection.toggle();
                debug!(
                    ?state,
                    delivery_time = %self.connection.delivery_time(),
                    "Connection toggled"
                );
                Ok(ScreenOutcome::Connection(state))
            }
            ScreenEvent::SelectMarker(id) => {
                self.ready_region()?;
                let region = self
                    .markers
                    .focus_region(id, ctx.focus_span)
                    .ok_or(ScreenError::UnknownMarker(id))?;
                ctx.map_view.animate_to_region(region);
                Ok(ScreenOutcome::Focused(region))
            }
            ScreenEvent::SendPing => {
                let region = self.ready_region()?;
                let ping = LocationPing::new(ctx.ping_message.clone(), region.center());
                dispatch_ping(ctx.transport.clone(), ctx.notifier.clone(), ping.clone());
                Ok(ScreenOutcome::PingDispatched(ping))
            }
        }
    }
}
