//! Error types for location acquisition.

use crate::services::Alert;
use thiserror::Error;

/// Why the device location could not be used.
///
/// Both variants lead to the same recovery (fallback region plus one alert); they differ
/// only in what the alert says.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LocationError {
    /// The courier refused the location permission.
    #[error("Location permission denied")]
    PermissionDenied,

    /// The permission request itself failed, or the position lookup failed.
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

impl LocationError {
    /// The alert shown to the courier when this error forces the fallback.
    pub fn alert(&self) -> Alert {
        match self {
            LocationError::PermissionDenied => Alert::new(
                "Permission Denied",
                "Location permission is required to show your current location on the map.",
            ),
            LocationError::Unavailable(message) => Alert::new(
                "Error",
                format!(
                    "Failed to get your location: {message} Make sure your location is enabled."
                ),
            ),
        }
    }
}
