//! Order repository implementation.
//!
//! Placement locks every referenced product row in id order, so competing
//! orders queue on the same rows instead of deadlocking, then checks all
//! lines before decrementing any of them.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_core::types::{PageRequest, PageResponse};
use blacklight_entity::order::{
    NewOrder, Order, OrderItem, OrderStatus, reserve_lines, reserved_total,
};
use blacklight_entity::product::Product;
use blacklight_entity::report::OrderTotals;

use crate::error::map_db_error;
use crate::store::OrderStore;

#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach items to a batch of orders with one query.
    async fn with_items(&self, mut orders: Vec<Order>) -> AppResult<Vec<Order>> {
        if orders.is_empty() {
            return Ok(orders);
        }
        let ids: Vec<Uuid> = orders.iter().map(|o| o.id).collect();
        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT * FROM order_items WHERE order_id = ANY($1) ORDER BY product_name",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to load order items"))?;

        let mut grouped: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
        for item in items {
            grouped.entry(item.order_id).or_default().push(item);
        }
        for order in &mut orders {
            order.items = grouped.remove(&order.id).unwrap_or_default();
        }
        Ok(orders)
    }

    async fn lock_order(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
    ) -> AppResult<Order> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| map_db_error(e, "Failed to lock order"))?
            .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))
    }

    async fn reload(&self, order: Order) -> AppResult<Order> {
        let mut loaded = self.with_items(vec![order]).await?;
        loaded
            .pop()
            .ok_or_else(|| AppError::internal("Order vanished while loading items"))
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        let order = sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to find order"))?;
        match order {
            Some(order) => Ok(Some(self.reload(order).await?)),
            None => Ok(None),
        }
    }

    async fn list(
        &self,
        customer_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Order>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM orders WHERE ($1::uuid IS NULL OR customer_id = $1)",
        )
        .bind(customer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to count orders"))?;

        let orders = sqlx::query_as::<_, Order>(
            r#"SELECT * FROM orders
               WHERE ($1::uuid IS NULL OR customer_id = $1)
               ORDER BY created_at DESC, id
               LIMIT $2 OFFSET $3"#,
        )
        .bind(customer_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to list orders"))?;

        let orders = self.with_items(orders).await?;
        Ok(PageResponse::new(orders, page, total as u64))
    }

    async fn place(&self, order: &NewOrder) -> AppResult<Order> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        let mut ids: Vec<Uuid> = order.lines.iter().map(|l| l.product_id).collect();
        ids.sort();
        let products: HashMap<Uuid, Product> = sqlx::query_as::<_, Product>(
            "SELECT * FROM products WHERE id = ANY($1) ORDER BY id FOR UPDATE",
        )
        .bind(&ids)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to lock products"))?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();

        // Dropping `tx` on error rolls back; nothing has been written yet.
        let reserved = reserve_lines(&order.lines, &products)?;

        for line in &reserved {
            sqlx::query("UPDATE products SET stock = stock - $2, updated_at = NOW() WHERE id = $1")
                .bind(line.product_id)
                .bind(line.quantity)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_db_error(e, "Failed to decrement stock"))?;
        }

        let order_id = Uuid::new_v4();
        let mut created = sqlx::query_as::<_, Order>(
            r#"INSERT INTO orders
                   (id, customer_id, customer_name, order_type, location, phone_number,
                    total_amount, status, payment_status)
               VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending', 'unpaid')
               RETURNING *"#,
        )
        .bind(order_id)
        .bind(order.customer_id)
        .bind(&order.customer_name)
        .bind(order.order_type)
        .bind(&order.location)
        .bind(&order.phone_number)
        .bind(reserved_total(&reserved))
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to insert order"))?;

        for line in &reserved {
            let item = sqlx::query_as::<_, OrderItem>(
                r#"INSERT INTO order_items (id, order_id, product_id, product_name, unit_price, quantity)
                   VALUES ($1, $2, $3, $4, $5, $6)
                   RETURNING *"#,
            )
            .bind(Uuid::new_v4())
            .bind(order_id)
            .bind(line.product_id)
            .bind(&line.product_name)
            .bind(line.unit_price)
            .bind(line.quantity)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| map_db_error(e, "Failed to insert order item"))?;
            created.items.push(item);
        }

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit order"))?;
        Ok(created)
    }

    async fn update_status(&self, id: Uuid, next: OrderStatus) -> AppResult<Order> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error(e, "Failed to begin transaction"))?;

        let current = Self::lock_order(&mut tx, id).await?;
        if !current.status.can_transition_to(next, current.order_type) {
            return Err(AppError::invalid_status_transition(current.status, next));
        }

        let updated = sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(next)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_db_error(e, "Failed to update order status"))?;

        tx.commit()
            .await
            .map_err(|e| map_db_error(e, "Failed to commit order status"))?;
        self.reload(updated).await
    }

    async fn mark_paid(&self, id: Uuid) -> AppResult<Order> {
        let updated = sqlx::query_as::<_, Order>(
            r#"UPDATE orders SET
                   updated_at = CASE WHEN payment_status = 'paid' THEN updated_at ELSE NOW() END,
                   payment_status = 'paid'
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to mark order paid"))?
        .ok_or_else(|| AppError::not_found(format!("Order {id} not found")))?;
        self.reload(updated).await
    }

    async fn totals(&self, day: NaiveDate) -> AppResult<OrderTotals> {
        sqlx::query_as::<_, OrderTotals>(
            r#"SELECT
                   COALESCE(SUM(total_amount) FILTER (
                       WHERE status NOT IN ('pending', 'rejected')), 0)::numeric AS settled_revenue,
                   COALESCE(SUM(total_amount) FILTER (
                       WHERE (created_at AT TIME ZONE 'UTC')::date = $1
                         AND status <> 'rejected'), 0)::numeric AS revenue_on_day,
                   COUNT(*) FILTER (WHERE status NOT IN ('delivered', 'rejected')) AS unfulfilled,
                   COUNT(*) FILTER (WHERE status = 'pending') AS pending
               FROM orders"#,
        )
        .bind(day)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to total orders"))
    }
}
