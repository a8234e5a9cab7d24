use crate::location::LocationOutcome;
use crate::model::{ConnectionState, Region};
use crate::ping::LocationPing;

/// Everything that can happen to the courier screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    /// The location pipeline finished. Sent once, by the lifecycle layer.
    LocationResolved(LocationOutcome),
    /// The connect/disconnect button was pressed.
    ToggleConnection,
    /// A delivery marker was tapped.
    SelectMarker(u32),
    /// The "send location" button was pressed.
    SendPing,
}

/// What applying a [`ScreenEvent`] reports back.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenOutcome {
    Ready(Region),
    Connection(ConnectionState),
    Focused(Region),
    /// The ping is in flight. Its result only ever shows up as an alert.
    PingDispatched(LocationPing),
}
