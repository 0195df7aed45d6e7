//! Order entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::item::{OrderItem, OrderLine};
use super::status::{OrderStatus, OrderType};
use crate::payment::PaymentStatus;

/// A placed café order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub order_type: OrderType,
    /// Delivery destination; required for delivery orders.
    pub location: Option<String>,
    pub phone_number: Option<String>,
    /// Sum of `unit_price * quantity` over all items.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Line items, loaded separately from the `order_items` table.
    #[sqlx(skip)]
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Recompute the total from the line items.
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(OrderItem::line_total).sum()
    }
}

/// An order request whose lines have been merged and validated, ready to be
/// priced and reserved against stock by the store.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub customer_id: Uuid,
    pub customer_name: String,
    pub order_type: OrderType,
    pub location: Option<String>,
    pub phone_number: Option<String>,
    /// One entry per distinct product, sorted by product id.
    pub lines: Vec<OrderLine>,
}
