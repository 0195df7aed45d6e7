//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use blacklight_auth::jwt::{JwtDecoder, JwtEncoder};
use blacklight_auth::password::{PasswordHasher, PasswordValidator};
use blacklight_core::config::AppConfig;
use blacklight_database::Stores;
use blacklight_service::{
    AdService, AuthService, BookingPolicy, BookingService, DashboardService, OrderService,
    PaymentService, ProductService, RoomService, UserService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    pub config: Arc<AppConfig>,
    pub started_at: Instant,

    // ── Persistence ──────────────────────────────────────────
    pub stores: Stores,

    // ── Auth ─────────────────────────────────────────────────
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Services ─────────────────────────────────────────────
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub room_service: Arc<RoomService>,
    pub product_service: Arc<ProductService>,
    pub booking_service: Arc<BookingService>,
    pub order_service: Arc<OrderService>,
    pub payment_service: Arc<PaymentService>,
    pub ad_service: Arc<AdService>,
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wire every service over the given stores.
    pub fn new(config: AppConfig, stores: Stores) -> Self {
        let password_hasher = Arc::new(PasswordHasher::new());
        let password_validator = Arc::new(PasswordValidator::new(&config.auth));
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&stores.users),
            password_hasher,
            password_validator,
            jwt_encoder,
        ));
        let user_service = Arc::new(UserService::new(Arc::clone(&stores.users)));
        let room_service = Arc::new(RoomService::new(Arc::clone(&stores.rooms)));
        let product_service = Arc::new(ProductService::new(Arc::clone(&stores.products)));
        let booking_service = Arc::new(BookingService::new(
            Arc::clone(&stores.rooms),
            Arc::clone(&stores.bookings),
            BookingPolicy::new(&config.booking),
        ));
        let order_service = Arc::new(OrderService::new(
            Arc::clone(&stores.orders),
            Arc::clone(&stores.users),
        ));
        let payment_service = Arc::new(PaymentService::new(
            Arc::clone(&stores.orders),
            Arc::clone(&stores.bookings),
        ));
        let ad_service = Arc::new(AdService::new(Arc::clone(&stores.ads)));
        let dashboard_service = Arc::new(DashboardService::new(
            Arc::clone(&stores.users),
            Arc::clone(&stores.bookings),
            Arc::clone(&stores.orders),
        ));

        Self {
            config: Arc::new(config),
            started_at: Instant::now(),
            stores,
            jwt_decoder,
            auth_service,
            user_service,
            room_service,
            product_service,
            booking_service,
            order_service,
            payment_service,
            ad_service,
            dashboard_service,
        }
    }
}
