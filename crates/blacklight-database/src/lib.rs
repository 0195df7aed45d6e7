//! # blacklight-database
//!
//! Persistence for the BlackLight lounge: the store traits the service layer
//! depends on, their PostgreSQL implementations, an in-memory implementation
//! with the same atomicity guarantees, and the provider dispatch that picks
//! one of them from configuration.

pub mod connection;
pub mod error;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{AdStore, BookingStore, OrderStore, ProductStore, RoomStore, Stores, UserStore};
