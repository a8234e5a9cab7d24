use super::connection::Connection;
use super::geo::Region;
use super::marker::MarkerSet;
use serde::{Deserialize, Serialize};

/// Whether the screen is still waiting for its first location.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ScreenPhase {
    #[default]
    Loading,
    Ready(Region),
}

/// Where the ready region came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationSource {
    Device,
    Fallback,
}

/// Everything the courier screen holds while it is alive.
///
/// The value is owned by the screen actor and changes only through
/// [`ScreenEvent`](crate::screen_actor::ScreenEvent)s. See
/// [`impl ScreenModel for ScreenState`](crate::screen_actor::entity) for the transitions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenState {
    pub(crate) phase: ScreenPhase,
    pub(crate) source: Option<LocationSource>,
    pub(crate) connection: Connection,
    pub(crate) markers: MarkerSet,
}

impl ScreenState {
    /// A loading screen showing `markers`.
    pub fn new(markers: MarkerSet) -> Self {
        Self {
            markers,
            ..Default::default()
        }
    }

    pub const fn phase(&self) -> ScreenPhase {
        self.phase
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, ScreenPhase::Loading)
    }

    /// The map region once ready.
    pub const fn location(&self) -> Option<Region> {
        match self.phase {
            ScreenPhase::Loading => None,
            ScreenPhase::Ready(region) => Some(region),
        }
    }

    pub const fn location_source(&self) -> Option<LocationSource> {
        self.source
    }

    pub const fn connection(&self) -> &Connection {
        &self.connection
    }

    pub const fn markers(&self) -> &MarkerSet {
        &self.markers
    }
}
