//! Store traits and the provider dispatch that builds them.
//!
//! Services depend only on these traits. Each trait documents which of its
//! operations must be atomic; both the PostgreSQL repositories and the
//! in-memory store honour those guarantees.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use blacklight_core::config::DatabaseConfig;
use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_core::types::{PageRequest, PageResponse};
use blacklight_entity::ad::{Ad, CreateAd};
use blacklight_entity::booking::{Booking, BookingStatus, NewBooking};
use blacklight_entity::order::{NewOrder, Order, OrderStatus};
use blacklight_entity::product::{CreateProduct, Product, ProductCategory, UpdateProduct};
use blacklight_entity::report::{BookingTotals, OrderTotals};
use blacklight_entity::room::{CreateRoom, Room, UpdateRoom};
use blacklight_entity::user::{CreateUser, UpdateProfile, User};

use crate::connection::DatabasePool;
use crate::memory::MemoryStore;
use crate::repositories::{
    AdRepository, BookingRepository, OrderRepository, ProductRepository, RoomRepository,
    UserRepository,
};

#[async_trait]
pub trait RoomStore: Send + Sync + 'static {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>>;
    async fn list(&self) -> AppResult<Vec<Room>>;
    async fn create(&self, data: &CreateRoom) -> AppResult<Room>;
    /// Returns `None` when the room does not exist.
    async fn update(&self, id: Uuid, data: &UpdateRoom) -> AppResult<Option<Room>>;
    /// Fails with `Conflict` while bookings still reference the room.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

#[async_trait]
pub trait BookingStore: Send + Sync + 'static {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Booking>>;

    /// Newest first. `customer_id` restricts the listing to one customer.
    async fn list(
        &self,
        customer_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Booking>>;

    /// Pending and confirmed bookings for a room on a date.
    async fn find_active_for_room(&self, room_id: Uuid, date: NaiveDate)
    -> AppResult<Vec<Booking>>;

    /// Insert a pending, unpaid booking if its window is free.
    ///
    /// The overlap check and the insert form one atomic unit per room:
    /// of two concurrent overlapping requests exactly one succeeds and the
    /// other fails with `SlotConflict`. Fails with `NotFound` if the room
    /// does not exist.
    async fn create_if_free(&self, booking: &NewBooking) -> AppResult<Booking>;

    /// Move a booking to `next` if the transition table allows it, else
    /// `InvalidStatusTransition`. Read, check and write are atomic.
    async fn update_status(&self, id: Uuid, next: BookingStatus) -> AppResult<Booking>;

    /// Set the payment status to paid. Idempotent.
    async fn mark_paid(&self, id: Uuid) -> AppResult<Booking>;

    /// Revenue and status counts over all bookings; `day` selects the
    /// bookings counted as that day's revenue.
    async fn totals(&self, day: NaiveDate) -> AppResult<BookingTotals>;
}

#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Product>>;
    async fn list(&self, category: Option<ProductCategory>) -> AppResult<Vec<Product>>;
    async fn create(&self, data: &CreateProduct) -> AppResult<Product>;
    async fn update(&self, id: Uuid, data: &UpdateProduct) -> AppResult<Option<Product>>;
    /// Fails with `Conflict` while order items still reference the product.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

#[async_trait]
pub trait OrderStore: Send + Sync + 'static {
    /// Loads the order together with its items.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>>;

    async fn list(
        &self,
        customer_id: Option<Uuid>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Order>>;

    /// Check stock for every line, decrement it, and persist the order.
    ///
    /// All-or-nothing: if any line is short the call fails with
    /// `InsufficientStock` naming the product and no stock changes.
    /// Concurrent placements never take the same unit twice.
    async fn place(&self, order: &NewOrder) -> AppResult<Order>;

    /// Move an order to `next` following the pipeline for its order type.
    async fn update_status(&self, id: Uuid, next: OrderStatus) -> AppResult<Order>;

    /// Set the payment status to paid. Idempotent.
    async fn mark_paid(&self, id: Uuid) -> AppResult<Order>;

    /// Revenue and status counts over all orders; `day` is the UTC date of
    /// placement counted as that day's revenue.
    async fn totals(&self, day: NaiveDate) -> AppResult<OrderTotals>;
}

#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
    /// Case-insensitive lookup.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;
    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>>;
    async fn count(&self) -> AppResult<i64>;
    /// Fails with `Conflict` if the e-mail is taken (case-insensitive).
    async fn create(&self, data: &CreateUser) -> AppResult<User>;
    async fn update_profile(&self, id: Uuid, data: &UpdateProfile) -> AppResult<Option<User>>;
}

#[async_trait]
pub trait AdStore: Send + Sync + 'static {
    /// Ads that are permanent, have no expiry, or expire after `now`.
    async fn list_active(&self, now: DateTime<Utc>) -> AppResult<Vec<Ad>>;
    async fn create(&self, data: &CreateAd) -> AppResult<Ad>;
    async fn delete(&self, id: Uuid) -> AppResult<bool>;
}

/// The full set of stores handed to the service layer.
#[derive(Clone)]
pub struct Stores {
    pub rooms: Arc<dyn RoomStore>,
    pub bookings: Arc<dyn BookingStore>,
    pub products: Arc<dyn ProductStore>,
    pub orders: Arc<dyn OrderStore>,
    pub users: Arc<dyn UserStore>,
    pub ads: Arc<dyn AdStore>,
    pool: Option<DatabasePool>,
}

impl Stores {
    /// Build the stores for the configured provider.
    pub async fn from_config(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider.as_str() {
            "postgres" => {
                info!("Initializing PostgreSQL stores");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    crate::migration::run_migrations(pool.pool()).await?;
                }
                Ok(Self::postgres(pool))
            }
            "memory" => {
                info!("Initializing in-memory stores");
                Ok(Self::memory())
            }
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: postgres, memory"
            ))),
        }
    }

    /// Stores backed by one PostgreSQL pool.
    pub fn postgres(pool: DatabasePool) -> Self {
        let pg = pool.pool().clone();
        Self {
            rooms: Arc::new(RoomRepository::new(pg.clone())),
            bookings: Arc::new(BookingRepository::new(pg.clone())),
            products: Arc::new(ProductRepository::new(pg.clone())),
            orders: Arc::new(OrderRepository::new(pg.clone())),
            users: Arc::new(UserRepository::new(pg.clone())),
            ads: Arc::new(AdRepository::new(pg)),
            pool: Some(pool),
        }
    }

    /// Stores sharing a single fresh in-memory state.
    pub fn memory() -> Self {
        let store = MemoryStore::new();
        Self {
            rooms: Arc::new(store.clone()),
            bookings: Arc::new(store.clone()),
            products: Arc::new(store.clone()),
            orders: Arc::new(store.clone()),
            users: Arc::new(store.clone()),
            ads: Arc::new(store),
            pool: None,
        }
    }

    /// Name of the active backend, for health reporting.
    pub fn backend(&self) -> &'static str {
        if self.pool.is_some() {
            "postgres"
        } else {
            "memory"
        }
    }

    /// Whether the backend is reachable. Always true for memory.
    pub async fn health_check(&self) -> AppResult<bool> {
        match &self.pool {
            Some(pool) => pool.health_check().await,
            None => Ok(true),
        }
    }

    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
