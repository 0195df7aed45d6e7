//! Café ordering with all-or-nothing stock reservation.

pub mod cart;
pub mod service;

pub use cart::merge_lines;
pub use service::{OrderService, PlaceOrder};
