use serde::{Deserialize, Serialize};

/// A point on the map. Any float is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// How much of the map around a center is visible, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Span {
    pub const fn new(latitude_delta: f64, longitude_delta: f64) -> Self {
        Self {
            latitude_delta,
            longitude_delta,
        }
    }
}

/// A map framing: a center coordinate plus the visible span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Region {
    pub const fn around(center: Coordinate, span: Span) -> Self {
        Self {
            latitude: center.latitude,
            longitude: center.longitude,
            latitude_delta: span.latitude_delta,
            longitude_delta: span.longitude_delta,
        }
    }

    pub const fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    pub const fn span(&self) -> Span {
        Span::new(self.latitude_delta, self.longitude_delta)
    }
}

/// Reference point used when the device location cannot be obtained (Mogi das Cruzes).
pub const FALLBACK_COORDINATE: Coordinate = Coordinate::new(-23.1857, -46.8978);

/// Wide framing around the fallback coordinate.
pub const FALLBACK_SPAN: Span = Span::new(0.0922, 0.0421);

/// Tight framing around a live device fix.
pub const DEVICE_FIX_SPAN: Span = Span::new(0.01, 0.01);

/// Framing used when a delivery marker is selected.
pub const MARKER_FOCUS_SPAN: Span = Span::new(0.05, 0.05);
