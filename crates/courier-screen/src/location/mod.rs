//! # Location Acquisition & Fallback
//!
//! Obtains the device's current coordinate once, when the screen starts, or substitutes
//! the fallback region when that is not possible.
//!
//! ## Structure
//!
//! - [`PermissionService`] / [`LocationService`] - the device capabilities, supplied by the host
//! - [`pipeline`] - the permission-then-locate pipeline and its [`LocationOutcome`]
//! - [`error`] - [`LocationError`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! let pipeline = LocationPipeline::new(Platform::Android);
//! match pipeline.acquire(&permissions, &locator).await {
//!     LocationOutcome::Acquired(region) => { /* live fix */ }
//!     LocationOutcome::Fallback { region, cause } => { /* alert about cause */ }
//! }
//! ```

pub mod error;
pub mod pipeline;

pub use error::*;
pub use pipeline::*;

use crate::model::Coordinate;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Platform family the screen runs on.
///
/// Only Android asks for a runtime permission; iOS is treated as pre-authorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Android,
    Ios,
}

impl Platform {
    pub const fn requires_permission(&self) -> bool {
        matches!(self, Platform::Android)
    }
}

/// Answer to a runtime permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Runtime permission dialog for fine location.
#[async_trait]
pub trait PermissionService: Send + Sync {
    /// Asks for fine location access. An `Err` means the request itself failed.
    async fn request_fine_location(&self) -> Result<PermissionStatus, LocationError>;
}

/// The device's "get current position" call.
#[async_trait]
pub trait LocationService: Send + Sync {
    async fn current_position(&self) -> Result<Coordinate, LocationError>;
}
