//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an environment overlay, and `BLACKLIGHT__*`
//! environment variables. Every field has a default, so an empty source
//! set still yields a runnable configuration.

pub mod app;
pub mod auth;
pub mod booking;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::booking::BookingConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Persistence settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Booking window and deposit policy.
    #[serde(default)]
    pub booking: BookingConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the named environment.
    ///
    /// Merges `config/default`, `config/{env}` and environment variables
    /// prefixed with `BLACKLIGHT__` (e.g. `BLACKLIGHT__SERVER__PORT`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("BLACKLIGHT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let cfg: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject settings that would make the booking rules meaningless.
    pub fn validate(&self) -> Result<(), AppError> {
        let b = &self.booking;
        if b.open_hour > b.close_hour || b.close_hour > 23 {
            return Err(AppError::configuration(format!(
                "Invalid operating window {}..={}",
                b.open_hour, b.close_hour
            )));
        }
        if b.deposit_percent > 100 {
            return Err(AppError::configuration(
                "deposit_percent must be between 0 and 100",
            ));
        }
        match self.database.provider.as_str() {
            "postgres" | "memory" => {}
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown database provider '{other}'"
                )));
            }
        }
        if self.auth.jwt_secret.is_empty() {
            return Err(AppError::configuration("auth.jwt_secret must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_lounge_policy() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.booking.open_hour, 9);
        assert_eq!(cfg.booking.close_hour, 23);
        assert_eq!(cfg.booking.deposit_percent, 20);
        assert_eq!(cfg.auth.jwt_ttl_minutes, 180);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_deserializes_to_defaults() {
        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from_str("", config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.database.provider, "postgres");
    }

    #[test]
    fn test_partial_section_overrides() {
        let toml = "[booking]\nopen_hour = 10\n[database]\nprovider = \"memory\"\n";
        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.booking.open_hour, 10);
        assert_eq!(cfg.booking.close_hour, 23);
        assert_eq!(cfg.database.provider, "memory");
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.booking.open_hour = 20;
        cfg.booking.close_hour = 10;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_unknown_provider_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.database.provider = "sqlite".into();
        assert!(cfg.validate().is_err());
    }
}
