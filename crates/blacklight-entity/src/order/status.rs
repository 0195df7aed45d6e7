//! Order type, status, and the fulfillment transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_type", rename_all = "snake_case")]
pub enum OrderType {
    /// Served in the lounge.
    DineIn,
    /// Taken to the customer's location.
    Delivery,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "DineIn",
            Self::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    /// Out for delivery. Only delivery orders pass through this state.
    #[serde(rename = "On the way")]
    OnTheWay,
    Delivered,
    Rejected,
}

impl OrderStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered | Self::Rejected)
    }

    /// Check whether `next` is reachable from `self` in one step for an
    /// order of the given type.
    ///
    /// Delivery: `Pending -> Processing -> On the way -> Delivered`.
    /// Dine-in: `Pending -> Processing -> Delivered`.
    /// Every non-terminal state may also move to `Rejected`.
    pub fn can_transition_to(&self, next: OrderStatus, order_type: OrderType) -> bool {
        use OrderStatus::*;
        if next == Rejected {
            return !self.is_terminal();
        }
        match order_type {
            OrderType::Delivery => matches!(
                (self, next),
                (Pending, Processing) | (Processing, OnTheWay) | (OnTheWay, Delivered)
            ),
            OrderType::DineIn => {
                matches!((self, next), (Pending, Processing) | (Processing, Delivered))
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::OnTheWay => "On the way",
            Self::Delivered => "Delivered",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = blacklight_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "ontheway" => Ok(Self::OnTheWay),
            "delivered" => Ok(Self::Delivered),
            "rejected" => Ok(Self::Rejected),
            _ => Err(blacklight_core::AppError::validation(format!(
                "Invalid order status: '{s}'"
            ))),
        }
    }
}
