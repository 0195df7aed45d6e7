//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered lounge user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name; also used as the customer name on orders.
    pub name: String,
    /// Login e-mail, stored lowercase.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Role (RBAC).
    pub role: UserRole,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Default delivery location.
    pub location: Option<String>,
    /// Avatar URL.
    pub image: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the profile last changed.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    /// E-mail; normalized to lowercase by the store.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    pub role: UserRole,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}

/// Self-service profile changes. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}
