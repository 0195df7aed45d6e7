//! Route definitions for the BlackLight HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::Router;
use axum::routing::{delete, get, patch, post, put};

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` router. Middleware is applied in [`crate::app::build_app`].
pub fn build_router() -> Router<AppState> {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(room_routes())
        .merge(booking_routes())
        .merge(product_routes())
        .merge(order_routes())
        .merge(payment_routes())
        .merge(ad_routes())
        .route("/dashboard", get(handlers::dashboard::summary))
        .route("/health", get(handlers::health::health));

    Router::new().nest("/api", api_routes)
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(handlers::user::list_users))
        .route("/users/me", put(handlers::user::update_me))
}

fn room_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/rooms",
            get(handlers::room::list_rooms).post(handlers::room::create_room),
        )
        .route(
            "/rooms/{id}",
            get(handlers::room::get_room)
                .put(handlers::room::update_room)
                .delete(handlers::room::delete_room),
        )
        .route(
            "/rooms/{id}/availability",
            get(handlers::room::room_availability),
        )
}

fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(handlers::booking::list_bookings).post(handlers::booking::create_booking),
        )
        .route("/bookings/{id}", get(handlers::booking::get_booking))
        .route(
            "/bookings/{id}/status",
            patch(handlers::booking::update_booking_status),
        )
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(handlers::order::list_orders).post(handlers::order::place_order),
        )
        .route("/orders/{id}", get(handlers::order::get_order))
        .route(
            "/orders/{id}/status",
            patch(handlers::order::update_order_status),
        )
}

fn payment_routes() -> Router<AppState> {
    Router::new().route(
        "/payments/{target}/{id}/mark-paid",
        post(handlers::payment::mark_paid),
    )
}

fn ad_routes() -> Router<AppState> {
    Router::new()
        .route("/ads", get(handlers::ad::list_ads).post(handlers::ad::create_ad))
        .route("/ads/{id}", delete(handlers::ad::delete_ad))
}
