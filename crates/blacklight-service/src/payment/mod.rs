//! Payment confirmation for orders and bookings.

pub mod service;

pub use service::{PaymentConfirmation, PaymentService};
