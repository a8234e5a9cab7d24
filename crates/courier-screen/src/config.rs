//! Screen configuration.
//!
//! Every field has a default, so an empty (or missing) TOML file yields the stock
//! configuration:
//!
//! ```toml
//! platform = "android"
//! ping_endpoint = "http://192.168.18.247:8000/api/send-message"
//! ping_message = "Hello world"
//! mailbox_capacity = 32
//!
//! [fallback_coordinate]
//! latitude = -23.1857
//! longitude = -46.8978
//!
//! [fallback_span]
//! latitude_delta = 0.0922
//! longitude_delta = 0.0421
//! ```

use crate::location::Platform;
use crate::model::{
    Coordinate, Region, Span, DEVICE_FIX_SPAN, FALLBACK_COORDINATE, FALLBACK_SPAN,
    MARKER_FOCUS_SPAN,
};
use crate::ping::{PING_ENDPOINT, PING_MESSAGE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Platform family (android, ios)
    #[serde(default)]
    pub platform: Platform,

    /// Center used when the device location is unavailable
    #[serde(default = "default_fallback_coordinate")]
    pub fallback_coordinate: Coordinate,

    #[serde(default = "default_fallback_span")]
    pub fallback_span: Span,

    /// Framing around a live device fix
    #[serde(default = "default_device_span")]
    pub device_span: Span,

    /// Framing used when a marker is selected
    #[serde(default = "default_focus_span")]
    pub focus_span: Span,

    #[serde(default = "default_ping_endpoint")]
    pub ping_endpoint: String,

    #[serde(default = "default_ping_message")]
    pub ping_message: String,

    /// Screen actor mailbox size
    #[serde(default = "default_mailbox_capacity")]
    pub mailbox_capacity: usize,
}

fn default_fallback_coordinate() -> Coordinate {
    FALLBACK_COORDINATE
}

fn default_fallback_span() -> Span {
    FALLBACK_SPAN
}

fn default_device_span() -> Span {
    DEVICE_FIX_SPAN
}

fn default_focus_span() -> Span {
    MARKER_FOCUS_SPAN
}

fn default_ping_endpoint() -> String {
    PING_ENDPOINT.to_string()
}

fn default_ping_message() -> String {
    PING_MESSAGE.to_string()
}

fn default_mailbox_capacity() -> usize {
    32
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            fallback_coordinate: default_fallback_coordinate(),
            fallback_span: default_fallback_span(),
            device_span: default_device_span(),
            focus_span: default_focus_span(),
            ping_endpoint: default_ping_endpoint(),
            ping_message: default_ping_message(),
            mailbox_capacity: default_mailbox_capacity(),
        }
    }
}

impl ScreenConfig {
    pub fn fallback_region(&self) -> Region {
        Region::around(self.fallback_coordinate, self.fallback_span)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
