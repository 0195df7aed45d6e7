//! Profile operations for signed-in users and the admin user listing.

use std::sync::Arc;

use tracing::info;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_core::types::{PageRequest, PageResponse};
use blacklight_database::store::UserStore;
use blacklight_entity::user::{UpdateProfile, User};

use crate::context::RequestContext;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    pub async fn update_me(&self, ctx: &RequestContext, mut data: UpdateProfile) -> AppResult<User> {
        if let Some(name) = &data.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(AppError::validation("Name must not be empty"));
            }
            data.name = Some(name.to_string());
        }

        let user = self
            .users
            .update_profile(ctx.user_id, &data)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    /// Admin listing, newest first.
    pub async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        self.users.list(page).await
    }
}
