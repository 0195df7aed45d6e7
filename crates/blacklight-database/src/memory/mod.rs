//! In-memory store.
//!
//! Every table lives behind one `tokio::sync::Mutex`, so each trait method
//! runs as a single critical section. That gives the same atomicity as the
//! PostgreSQL transactions: the booking overlap check and insert, and the
//! stock check and decrement, can never interleave with another request.

mod booking;
mod catalog;
mod order;
mod user;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use blacklight_entity::ad::Ad;
use blacklight_entity::booking::Booking;
use blacklight_entity::order::Order;
use blacklight_entity::product::Product;
use blacklight_entity::room::Room;
use blacklight_entity::user::User;

/// Tables held by the in-memory store. Vectors keep insertion order.
#[derive(Debug, Default)]
struct MemoryState {
    rooms: HashMap<Uuid, Room>,
    bookings: Vec<Booking>,
    products: HashMap<Uuid, Product>,
    orders: Vec<Order>,
    users: HashMap<Uuid, User>,
    ads: Vec<Ad>,
}

/// Store implementation for tests and local runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
