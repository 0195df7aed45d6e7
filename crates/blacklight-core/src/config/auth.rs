//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_ttl_minutes: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
    /// E-mail of the admin account ensured at start-up.
    #[serde(default = "default_admin_email")]
    pub bootstrap_admin_email: String,
    /// Password of the admin account ensured at start-up.
    #[serde(default = "default_admin_password")]
    pub bootstrap_admin_password: String,
    /// Display name of the bootstrap admin.
    #[serde(default = "default_admin_name")]
    pub bootstrap_admin_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_ttl_minutes: default_access_ttl(),
            password_min_length: default_password_min(),
            bootstrap_admin_email: default_admin_email(),
            bootstrap_admin_password: default_admin_password(),
            bootstrap_admin_name: default_admin_name(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    180
}

fn default_password_min() -> usize {
    6
}

fn default_admin_email() -> String {
    "blacklight@game.com".to_string()
}

fn default_admin_password() -> String {
    "CHANGE_ME_ADMIN".to_string()
}

fn default_admin_name() -> String {
    "BlackLight Admin".to_string()
}
