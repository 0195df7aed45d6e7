//! Bookable gaming rooms.

pub mod kind;
pub mod model;

pub use kind::RoomType;
pub use model::{CreateRoom, Room, UpdateRoom};
