//! Room and café catalog management.

pub mod product;
pub mod room;

pub use product::ProductService;
pub use room::RoomService;
