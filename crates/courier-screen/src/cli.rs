//! CLI definition using clap

use crate::config::{ConfigError, ScreenConfig};
use crate::location::Platform;
use crate::model::Coordinate;
use crate::services::SimulatedDevice;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "courier-screen")]
#[command(version)]
#[command(about = "Courier delivery map screen, driven by a simulated device")]
#[command(long_about = None)]
pub struct Cli {
    /// TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Platform family (android, ios). Uses config value if not specified.
    #[arg(long, value_enum)]
    pub platform: Option<Platform>,

    /// Simulate the courier refusing the location permission
    #[arg(long)]
    pub deny_permission: bool,

    /// Simulate the permission request itself failing with this message
    #[arg(long, value_name = "MSG")]
    pub permission_error: Option<String>,

    /// Simulate the position lookup failing with this message
    #[arg(long, value_name = "MSG")]
    pub location_error: Option<String>,

    /// Latitude reported by the simulated device
    #[arg(long, default_value_t = -23.1867, allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude reported by the simulated device
    #[arg(long, default_value_t = -46.8965, allow_negative_numbers = true)]
    pub longitude: f64,

    /// Press the connect/disconnect button this many times
    #[arg(long, default_value_t = 0)]
    pub toggles: u32,

    /// Select the delivery marker with this id
    #[arg(long, value_name = "ID")]
    pub select: Option<u32>,

    /// Send a location ping
    #[arg(long)]
    pub ping: bool,

    /// Ping endpoint override
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,
}

impl Cli {
    /// Loads the config file (if any) and applies the command-line overrides.
    pub fn load_config(&self) -> Result<ScreenConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ScreenConfig::load(path)?,
            None => ScreenConfig::default(),
        };
        if let Some(platform) = self.platform {
            config.platform = platform;
        }
        if let Some(endpoint) = &self.endpoint {
            config.ping_endpoint = endpoint.clone();
        }
        Ok(config)
    }

    pub fn simulated_device(&self) -> SimulatedDevice {
        let mut device = SimulatedDevice::at(Coordinate::new(self.latitude, self.longitude));
        if self.deny_permission {
            device = device.deny_permission();
        }
        if let Some(message) = &self.permission_error {
            device = device.fail_permission(message.clone());
        }
        if let Some(message) = &self.location_error {
            device = device.fail_position(message.clone());
        }
        device
    }
}
