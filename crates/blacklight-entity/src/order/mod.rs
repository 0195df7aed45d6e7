//! Café orders and their fulfillment pipeline.

pub mod item;
pub mod model;
pub mod reservation;
pub mod status;

pub use item::{OrderItem, OrderLine};
pub use model::{NewOrder, Order};
pub use reservation::{ReservedLine, reserve_lines, reserved_total};
pub use status::{OrderStatus, OrderType};
