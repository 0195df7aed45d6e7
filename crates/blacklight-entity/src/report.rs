//! Aggregates over bookings and orders for the admin dashboard.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

use crate::booking::{Booking, BookingStatus};
use crate::order::{Order, OrderStatus};

/// Revenue and workload figures over the bookings table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct BookingTotals {
    /// `total_price` of bookings that are neither pending nor rejected.
    pub settled_revenue: Decimal,
    /// `total_price` of non-rejected bookings dated on the given day.
    pub revenue_on_day: Decimal,
    pub confirmed: i64,
    pub pending: i64,
}

impl BookingTotals {
    pub fn tally<'a>(bookings: impl IntoIterator<Item = &'a Booking>, day: NaiveDate) -> Self {
        bookings.into_iter().fold(Self::default(), |mut acc, b| {
            match b.status {
                BookingStatus::Pending => acc.pending += 1,
                BookingStatus::Confirmed => acc.confirmed += 1,
                _ => {}
            }
            if !matches!(b.status, BookingStatus::Pending | BookingStatus::Rejected) {
                acc.settled_revenue += b.total_price;
            }
            if b.booking_date == day && b.status != BookingStatus::Rejected {
                acc.revenue_on_day += b.total_price;
            }
            acc
        })
    }
}

/// Revenue and workload figures over the orders table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct OrderTotals {
    /// `total_amount` of orders that are neither pending nor rejected.
    pub settled_revenue: Decimal,
    /// `total_amount` of non-rejected orders placed on the given UTC day.
    pub revenue_on_day: Decimal,
    /// Orders not yet delivered or rejected.
    pub unfulfilled: i64,
    pub pending: i64,
}

impl OrderTotals {
    pub fn tally<'a>(orders: impl IntoIterator<Item = &'a Order>, day: NaiveDate) -> Self {
        orders.into_iter().fold(Self::default(), |mut acc, o| {
            if o.status == OrderStatus::Pending {
                acc.pending += 1;
            }
            if !o.status.is_terminal() {
                acc.unfulfilled += 1;
            }
            if !matches!(o.status, OrderStatus::Pending | OrderStatus::Rejected) {
                acc.settled_revenue += o.total_amount;
            }
            if o.created_at.date_naive() == day && o.status != OrderStatus::Rejected {
                acc.revenue_on_day += o.total_amount;
            }
            acc
        })
    }
}
