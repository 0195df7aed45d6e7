//! Orders and stock reservation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_core::types::{PageRequest, PageResponse};
use blacklight_entity::order::{
    NewOrder, Order, OrderItem, OrderStatus, reserve_lines, reserved_total,
};
use blacklight_entity::payment::PaymentStatus;
use blacklight_entity::product::Product;
use blacklight_entity::report::OrderTotals;

use super::MemoryStore;
use crate::store::OrderStore;

#[async_trait]
impl OrderStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        let state = self.state.lock().await;
        Ok(state.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn list(
        &self,
        customer_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Order>> {
        let state = self.state.lock().await;
        let matching: Vec<Order> = state
            .orders
            .iter()
            .rev()
            .filter(|o| customer_id.is_none_or(|c| o.customer_id == c))
            .cloned()
            .collect();
        let total = matching.len() as u64;
        Ok(PageResponse::new(page.slice(&matching), page, total))
    }

    async fn place(&self, order: &NewOrder) -> AppResult<Order> {
        let mut state = self.state.lock().await;

        let referenced: HashMap<Uuid, Product> = order
            .lines
            .iter()
            .filter_map(|l| state.products.get(&l.product_id))
            .map(|p| (p.id, p.clone()))
            .collect();
        let reserved = reserve_lines(&order.lines, &referenced)?;

        let now = Utc::now();
        for line in &reserved {
            if let Some(product) = state.products.get_mut(&line.product_id) {
                product.stock = line.remaining_stock;
                product.updated_at = now;
            }
        }

        let order_id = Uuid::new_v4();
        let items = reserved
            .iter()
            .map(|line| OrderItem {
                id: Uuid::new_v4(),
                order_id,
                product_id: line.product_id,
                product_name: line.product_name.clone(),
                unit_price: line.unit_price,
                quantity: line.quantity,
            })
            .collect();
        let created = Order {
            id: order_id,
            customer_id: order.customer_id,
            customer_name: order.customer_name.clone(),
            order_type: order.order_type,
            location: order.location.clone(),
            phone_number: order.phone_number.clone(),
            total_amount: reserved_total(&reserved),
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            created_at: now,
            updated_at: now,
            items,
        };
        state.orders.push(created.clone());
        Ok(created)
    }

    async fn update_status(&self, id: Uuid, next: OrderStatus) -> AppResult<Order> {
        let mut state = self.state.lock().await;
        let order = state
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
        if !order.status.can_transition_to(next, order.order_type) {
            return Err(AppError::invalid_status_transition(order.status, next));
        }
        order.status = next;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    async fn mark_paid(&self, id: Uuid) -> AppResult<Order> {
        let mut state = self.state.lock().await;
        let order = state
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
        if !order.payment_status.is_paid() {
            order.payment_status = PaymentStatus::Paid;
            order.updated_at = Utc::now();
        }
        Ok(order.clone())
    }

    async fn totals(&self, day: NaiveDate) -> AppResult<OrderTotals> {
        let state = self.state.lock().await;
        Ok(OrderTotals::tally(&state.orders, day))
    }
}
