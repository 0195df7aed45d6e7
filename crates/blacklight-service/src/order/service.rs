//! Order operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use blacklight_core::error::{AppError, ErrorKind};
use blacklight_core::result::AppResult;
use blacklight_core::types::{PageRequest, PageResponse};
use blacklight_database::store::{OrderStore, UserStore};
use blacklight_entity::order::{NewOrder, Order, OrderLine, OrderStatus, OrderType};

use super::cart::merge_lines;
use crate::context::RequestContext;

/// A customer's cart at checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrder {
    pub items: Vec<OrderLine>,
    pub order_type: OrderType,
    /// Delivery destination. Falls back to the profile location.
    pub location: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderStore>,
    users: Arc<dyn UserStore>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderStore>, users: Arc<dyn UserStore>) -> Self {
        Self { orders, users }
    }

    /// Reserve stock for every line and create a pending, unpaid order.
    ///
    /// If any line exceeds current stock the whole order is rejected with
    /// `InsufficientStock` and no product is decremented.
    pub async fn place_order(&self, ctx: &RequestContext, req: PlaceOrder) -> AppResult<Order> {
        let lines = merge_lines(&req.items)?;

        let customer = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("Account no longer exists"))?;

        let location = non_blank(req.location).or_else(|| non_blank(customer.location.clone()));
        if req.order_type == OrderType::Delivery && location.is_none() {
            return Err(AppError::validation("Delivery orders need a location"));
        }
        let phone_number = non_blank(req.phone_number).or(customer.phone_number.clone());

        let order = self
            .orders
            .place(&NewOrder {
                customer_id: customer.id,
                customer_name: customer.name.clone(),
                order_type: req.order_type,
                location,
                phone_number,
                lines,
            })
            .await
            .inspect_err(|e| {
                if e.is(ErrorKind::InsufficientStock) {
                    warn!(customer_id = %customer.id, details = ?e.details, "Order rejected: insufficient stock");
                }
            })?;

        info!(
            order_id = %order.id,
            customer_id = %order.customer_id,
            order_type = %order.order_type,
            items = order.items.len(),
            total = %order.total_amount,
            "Order placed"
        );
        Ok(order)
    }

    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Order> {
        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
        ctx.ensure_can_access(order.customer_id, "order")?;
        Ok(order)
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Order>> {
        self.orders.list(ctx.owner_filter(), page).await
    }

    /// Admin status change along the fulfillment pipeline. Rejecting an
    /// order does not return its stock.
    pub async fn update_status(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        next: OrderStatus,
    ) -> AppResult<Order> {
        let order = self.orders.update_status(id, next).await?;
        info!(order_id = %id, status = %order.status, by = %ctx.user_id, "Order status changed");
        Ok(order)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
