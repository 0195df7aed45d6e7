//! Payment status shared by bookings and orders.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether the customer has settled an order or a booking deposit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Unpaid,
    Paid,
}

impl PaymentStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Paid)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "Unpaid",
            Self::Paid => "Paid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of entity a payment confirmation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentTarget {
    Order,
    Booking,
}

impl PaymentTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Order => "order",
            Self::Booking => "booking",
        }
    }
}

impl fmt::Display for PaymentTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentTarget {
    type Err = blacklight_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "order" | "orders" => Ok(Self::Order),
            "booking" | "bookings" => Ok(Self::Booking),
            _ => Err(blacklight_core::AppError::validation(format!(
                "Unknown payment target '{s}'. Expected 'order' or 'booking'"
            ))),
        }
    }
}
