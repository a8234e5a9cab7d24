//! Render-ready description of the screen, derived from [`ScreenState`] on demand.

use crate::model::{format_time, Coordinate, Region, ScreenPhase, ScreenState};
use serde::Serialize;

pub const NO_DELIVERY: &str = "No delivery in progress";
pub const LOCATION_PIN_TITLE: &str = "Your Location";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerDescriptor {
    pub id: u32,
    pub coordinate: Coordinate,
    pub title: String,
    pub description: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationPin {
    pub coordinate: Coordinate,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionButton {
    pub label: String,
    pub color: Color,
}

/// Everything the map screen draws once it has a location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScreen {
    pub region: Region,
    pub delivery_card: String,
    pub location_pin: LocationPin,
    pub markers: Vec<MarkerDescriptor>,
    pub connection_button: ConnectionButton,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ScreenView {
    /// Full-screen spinner.
    Loading,
    Map(MapScreen),
}

impl ScreenView {
    pub fn render(state: &ScreenState) -> Self {
        let region = match state.phase() {
            ScreenPhase::Loading => return ScreenView::Loading,
            ScreenPhase::Ready(region) => region,
        };

        let connection = state.connection();
        let delivery_time = connection.delivery_time();
        let delivery_card = if delivery_time.is_zero() {
            NO_DELIVERY.to_string()
        } else {
            format_time(delivery_time.minutes())
        };

        let connection_button = if connection.state().is_connected() {
            ConnectionButton {
                label: "Disconnect".to_string(),
                color: Color::Red,
            }
        } else {
            ConnectionButton {
                label: "Connect".to_string(),
                color: Color::Green,
            }
        };

        ScreenView::Map(MapScreen {
            region,
            delivery_card,
            location_pin: LocationPin {
                coordinate: region.center(),
                title: LOCATION_PIN_TITLE.to_string(),
            },
            markers: state.markers().descriptors(),
            connection_button,
        })
    }

    pub fn as_map(&self) -> Option<&MapScreen> {
        match self {
            ScreenView::Loading => None,
            ScreenView::Map(map) => Some(map),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        Connection, ConnectionState, DeliveryTime, MarkerSet, ScreenPhase, FALLBACK_COORDINATE,
        FALLBACK_SPAN,
    };

    fn ready(connection: Connection) -> ScreenState {
        ScreenState {
            phase: ScreenPhase::Ready(Region::around(FALLBACK_COORDINATE, FALLBACK_SPAN)),
            connection,
            ..ScreenState::new(MarkerSet::default())
        }
    }

    #[test]
    fn test_loading_renders_spinner() {
        assert_eq!(ScreenView::render(&ScreenState::default()), ScreenView::Loading);
    }

    #[test]
    fn test_disconnected_map() {
        let view = ScreenView::render(&ready(Connection::default()));
        let map = view.as_map().unwrap();

        assert_eq!(map.delivery_card, NO_DELIVERY);
        assert_eq!(map.location_pin.coordinate, FALLBACK_COORDINATE);
        assert_eq!(map.location_pin.title, "Your Location");
        assert_eq!(map.markers.len(), 3);
        assert_eq!(map.connection_button.label, "Connect");
        assert_eq!(map.connection_button.color, Color::Green);
    }

    #[test]
    fn test_connected_map_with_delivery_time() {
        let connection = Connection::with_delivery_time(
            ConnectionState::Connected,
            DeliveryTime::from_minutes(125),
        );
        let view = ScreenView::render(&ready(connection));
        let map = view.as_map().unwrap();

        assert_eq!(map.delivery_card, "2h 5m");
        assert_eq!(map.connection_button.label, "Disconnect");
        assert_eq!(map.connection_button.color, Color::Red);
    }
}
