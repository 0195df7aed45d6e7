//! Booking entity model.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::BookingStatus;
use super::window::HourWindow;
use crate::payment::PaymentStatus;

/// A reservation of a room for a contiguous block of hours on one day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub room_id: Uuid,
    pub customer_id: Uuid,
    pub booking_date: NaiveDate,
    /// First booked hour (0..=23).
    pub start_hour: i32,
    /// Number of whole hours booked.
    pub duration_hours: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    /// Amount due up front; the remainder is paid at the venue.
    #[serde(with = "rust_decimal::serde::float")]
    pub deposit_amount: Decimal,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// The hours this booking occupies.
    pub fn window(&self) -> HourWindow {
        HourWindow::new(self.start_hour, self.duration_hours)
    }

    /// Whether this booking blocks `window` on its room and date.
    pub fn blocks(&self, window: &HourWindow) -> bool {
        self.status.is_active() && self.window().overlaps(window)
    }
}

/// A validated, priced booking ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub room_id: Uuid,
    pub customer_id: Uuid,
    pub booking_date: NaiveDate,
    pub window: HourWindow,
    pub total_price: Decimal,
    pub deposit_amount: Decimal,
}
