//! Registration, login and the bootstrap administrator.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use blacklight_auth::jwt::JwtEncoder;
use blacklight_auth::password::{PasswordHasher, PasswordValidator};
use blacklight_core::config::AuthConfig;
use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_database::store::UserStore;
use blacklight_entity::user::{CreateUser, User, UserRole};

/// Self-registration form. New accounts are always customers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone_number: Option<String>,
    pub location: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A signed-in user and their access token.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub token: String,
    pub token_type: &'static str,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            hasher,
            validator,
            encoder,
        }
    }

    pub async fn register(&self, form: Registration) -> AppResult<AuthSession> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Name must not be empty"));
        }
        let email = normalize_email(&form.email)?;
        self.validator.validate(&form.password)?;

        let user = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email,
                password_hash: self.hasher.hash_password(&form.password)?,
                role: UserRole::Customer,
                phone_number: form.phone_number,
                location: form.location,
                image: form.image,
            })
            .await?;

        info!(user_id = %user.id, email = %user.email, "User registered");
        self.session_for(user)
    }

    /// Unknown e-mail and wrong password fail the same way.
    pub async fn login(&self, credentials: Credentials) -> AppResult<AuthSession> {
        let email = credentials.email.trim().to_lowercase();
        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!(email = %email, "Login failed: unknown e-mail");
            return Err(invalid_credentials());
        };

        if !self
            .hasher
            .verify_password(&credentials.password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(invalid_credentials());
        }

        info!(user_id = %user.id, role = %user.role, "User logged in");
        self.session_for(user)
    }

    /// Create the configured administrator if no account uses its e-mail.
    pub async fn ensure_bootstrap_admin(&self, config: &AuthConfig) -> AppResult<()> {
        let email = normalize_email(&config.bootstrap_admin_email)?;
        if self.users.find_by_email(&email).await?.is_some() {
            return Ok(());
        }

        let admin = self
            .users
            .create(&CreateUser {
                name: config.bootstrap_admin_name.clone(),
                email,
                password_hash: self.hasher.hash_password(&config.bootstrap_admin_password)?,
                role: UserRole::Admin,
                phone_number: None,
                location: None,
                image: None,
            })
            .await?;

        warn!(user_id = %admin.id, email = %admin.email, "Bootstrap admin created; change its password");
        Ok(())
    }

    fn session_for(&self, user: User) -> AppResult<AuthSession> {
        let issued = self.encoder.issue(&user)?;
        Ok(AuthSession {
            token: issued.token,
            token_type: "Bearer",
            expires_at: issued.expires_at,
            user,
        })
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid e-mail or password")
}

fn normalize_email(email: &str) -> AppResult<String> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(AppError::validation(format!("Invalid e-mail address: '{email}'"))),
    }
}
