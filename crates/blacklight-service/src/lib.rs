//! # blacklight-service
//!
//! Business operations of the lounge. Each service is constructed with the
//! store trait objects it needs, so the same code runs over PostgreSQL or the
//! in-memory store.
//!
//! The two operations with real invariants live in [`booking`] (slot
//! selection, overlap rejection, pricing) and [`order`] (all-or-nothing
//! stock reservation); [`payment`] flips the paid flag once an external
//! payment has been confirmed.

pub mod ad;
pub mod booking;
pub mod catalog;
pub mod context;
pub mod order;
pub mod payment;
pub mod report;
pub mod user;

pub use ad::AdService;
pub use booking::{BookingPolicy, BookingService};
pub use catalog::{ProductService, RoomService};
pub use context::RequestContext;
pub use order::OrderService;
pub use payment::PaymentService;
pub use report::DashboardService;
pub use user::{AuthService, UserService};

#[cfg(test)]
pub(crate) mod testing;
