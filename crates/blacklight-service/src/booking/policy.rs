//! Operating window and deposit rules.

use rust_decimal::Decimal;
use serde::Serialize;

use blacklight_core::config::BookingConfig;
use blacklight_core::error::AppError;
use blacklight_entity::booking::HourWindow;

/// The venue's booking rules, taken from configuration.
#[derive(Debug, Clone, Copy)]
pub struct BookingPolicy {
    open_hour: i32,
    close_hour: i32,
    deposit_percent: Decimal,
}

/// Price of a booking window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub deposit_amount: Decimal,
}

impl BookingPolicy {
    pub fn new(config: &BookingConfig) -> Self {
        Self {
            open_hour: i32::from(config.open_hour),
            close_hour: i32::from(config.close_hour),
            deposit_percent: Decimal::from(config.deposit_percent),
        }
    }

    /// Bookable hours, both ends inclusive.
    pub fn operating_hours(&self) -> std::ops::RangeInclusive<i32> {
        self.open_hour..=self.close_hour
    }

    /// Turn a set of requested hours into the window they cover.
    ///
    /// Duplicates collapse. The set must be non-empty, inside the operating
    /// window, and free of gaps; anything else is `InvalidSlotSelection`.
    pub fn select(&self, hours: &[i32]) -> Result<HourWindow, AppError> {
        let mut sorted = hours.to_vec();
        sorted.sort_unstable();
        sorted.dedup();

        let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
            return Err(AppError::invalid_slot_selection(
                "At least one hour must be selected",
            ));
        };

        if let Some(outside) = sorted.iter().find(|&&h| !self.operating_hours().contains(&h)) {
            return Err(AppError::invalid_slot_selection(format!(
                "Hour {outside} is outside operating hours {}-{}",
                self.open_hour, self.close_hour
            )));
        }

        let span = last - first + 1;
        if span as usize != sorted.len() {
            return Err(AppError::invalid_slot_selection(
                "Selected hours must be consecutive",
            ));
        }

        Ok(HourWindow::new(first, span))
    }

    /// `total = rate * hours`, `deposit = ceil(total * percent / 100)`.
    pub fn quote(&self, hourly_rate: Decimal, window: &HourWindow) -> Quote {
        let total_price = hourly_rate * Decimal::from(window.duration());
        let deposit_amount = (total_price * self.deposit_percent / Decimal::ONE_HUNDRED).ceil();
        Quote {
            total_price,
            deposit_amount,
        }
    }
}

impl Default for BookingPolicy {
    fn default() -> Self {
        Self::new(&BookingConfig::default())
    }
}
