//! # blacklight-api
//!
//! HTTP API layer for the BlackLight lounge built on Axum.
//!
//! Provides the REST endpoints, middleware (request logging, CORS, RBAC
//! guards), extractors, DTOs, and the mapping from `AppError` to HTTP
//! responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use state::AppState;
