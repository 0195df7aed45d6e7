//! Booking rules configuration.

use serde::{Deserialize, Serialize};

/// Operating window and deposit policy for room bookings.
///
/// Hours are on a 0..=23 scale; both ends of the window are bookable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// First bookable hour.
    #[serde(default = "default_open_hour")]
    pub open_hour: u8,
    /// Last bookable hour (inclusive).
    #[serde(default = "default_close_hour")]
    pub close_hour: u8,
    /// Deposit as a percentage of the booking total, rounded up.
    #[serde(default = "default_deposit_percent")]
    pub deposit_percent: u32,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
            deposit_percent: default_deposit_percent(),
        }
    }
}

fn default_open_hour() -> u8 {
    9
}

fn default_close_hour() -> u8 {
    23
}

fn default_deposit_percent() -> u32 {
    20
}
