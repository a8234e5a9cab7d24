use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Renders a minute count as `"{hours}h {minutes}m"`.
///
/// ```
/// use courier_screen::model::format_time;
///
/// assert_eq!(format_time(125), "2h 5m");
/// assert_eq!(format_time(0), "0h 0m");
/// assert_eq!(format_time(59), "0h 59m");
/// ```
pub fn format_time(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// Estimated time to finish the current run, in minutes.
///
/// Starts at zero and is reset to zero when the courier disconnects. Nothing else writes
/// it yet: the delivery markers' `estimated_time` is never copied here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliveryTime(u32);

impl DeliveryTime {
    pub const ZERO: DeliveryTime = DeliveryTime(0);

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    pub const fn minutes(&self) -> u32 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

impl Display for DeliveryTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_time(self.0))
    }
}
