//! Accounts: registration, login and self-service profiles.

pub mod auth;
pub mod service;

pub use auth::{AuthService, AuthSession, Credentials, Registration};
pub use service::UserService;
