//! Operations dashboard summary.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use blacklight_core::result::AppResult;
use blacklight_database::store::{BookingStore, OrderStore, UserStore};

use crate::context::RequestContext;

/// Headline figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// The UTC day the `today_revenue` figure refers to.
    pub date: NaiveDate,
    /// Bookings and orders past pending and not rejected.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    /// Non-rejected bookings dated today plus non-rejected orders placed today.
    #[serde(with = "rust_decimal::serde::float")]
    pub today_revenue: Decimal,
    pub registered_users: i64,
    /// Confirmed bookings.
    pub active_sessions: i64,
    /// Orders not yet delivered or rejected.
    pub unfulfilled_orders: i64,
    /// Pending bookings plus pending orders.
    pub pending_actions: i64,
}

#[derive(Clone)]
pub struct DashboardService {
    users: Arc<dyn UserStore>,
    bookings: Arc<dyn BookingStore>,
    orders: Arc<dyn OrderStore>,
}

impl DashboardService {
    pub fn new(
        users: Arc<dyn UserStore>,
        bookings: Arc<dyn BookingStore>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            users,
            bookings,
            orders,
        }
    }

    /// Summary as of the request's UTC date.
    pub async fn summary(&self, ctx: &RequestContext) -> AppResult<DashboardSummary> {
        let today = ctx.request_time.date_naive();
        let registered_users = self.users.count().await?;
        let bookings = self.bookings.totals(today).await?;
        let orders = self.orders.totals(today).await?;

        debug!(date = %today, by = %ctx.user_id, "Dashboard summary computed");

        Ok(DashboardSummary {
            date: today,
            total_revenue: bookings.settled_revenue + orders.settled_revenue,
            today_revenue: bookings.revenue_on_day + orders.revenue_on_day,
            registered_users,
            active_sessions: bookings.confirmed,
            unfulfilled_orders: orders.unfulfilled,
            pending_actions: bookings.pending + orders.pending,
        })
    }
}
