//! PostgreSQL implementations of the store traits.

pub mod ad;
pub mod booking;
pub mod order;
pub mod product;
pub mod room;
pub mod user;

pub use ad::AdRepository;
pub use booking::BookingRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use room::RoomRepository;
pub use user::UserRepository;
