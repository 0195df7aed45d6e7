//! Marks orders and bookings as paid after an external confirmation.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_database::store::{BookingStore, OrderStore};
use blacklight_entity::payment::{PaymentStatus, PaymentTarget};

use crate::context::RequestContext;

/// Result of a mark-paid call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentConfirmation {
    pub target: PaymentTarget,
    pub id: Uuid,
    pub payment_status: PaymentStatus,
    /// Order total, or the deposit for a booking.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Clone)]
pub struct PaymentService {
    orders: Arc<dyn OrderStore>,
    bookings: Arc<dyn BookingStore>,
}

impl PaymentService {
    pub fn new(orders: Arc<dyn OrderStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { orders, bookings }
    }

    /// Flip the payment flag. Calling it on an entity that is already paid
    /// succeeds and changes nothing.
    pub async fn mark_paid(
        &self,
        ctx: &RequestContext,
        target: PaymentTarget,
        id: Uuid,
    ) -> AppResult<PaymentConfirmation> {
        let (was_paid, payment_status, amount) = match target {
            PaymentTarget::Order => {
                let order = self
                    .orders
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
                ctx.ensure_can_access(order.customer_id, "order")?;
                let paid = self.orders.mark_paid(id).await?;
                (order.payment_status.is_paid(), paid.payment_status, paid.total_amount)
            }
            PaymentTarget::Booking => {
                let booking = self
                    .bookings
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::not_found(format!("Booking {id} not found")))?;
                ctx.ensure_can_access(booking.customer_id, "booking")?;
                let paid = self.bookings.mark_paid(id).await?;
                (
                    booking.payment_status.is_paid(),
                    paid.payment_status,
                    paid.deposit_amount,
                )
            }
        };

        if !was_paid {
            info!(target_kind = %target, id = %id, amount = %amount, by = %ctx.user_id, "Payment confirmed");
        }

        Ok(PaymentConfirmation {
            target,
            id,
            payment_status,
            amount,
        })
    }
}
