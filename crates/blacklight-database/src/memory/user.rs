//! Users.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_core::types::{PageRequest, PageResponse};
use blacklight_entity::user::{CreateUser, UpdateProfile, User};

use super::MemoryStore;
use crate::store::UserStore;

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.state.lock().await.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let state = self.state.lock().await;
        Ok(state
            .users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn list(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let state = self.state.lock().await;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        let total = users.len() as u64;
        Ok(PageResponse::new(page.slice(&users), page, total))
    }

    async fn create(&self, data: &CreateUser) -> AppResult<User> {
        let mut state = self.state.lock().await;
        if state
            .users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&data.email))
        {
            return Err(AppError::conflict("E-mail is already registered"));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            email: data.email.to_lowercase(),
            password_hash: data.password_hash.clone(),
            role: data.role,
            phone_number: data.phone_number.clone(),
            location: data.location.clone(),
            image: data.image.clone(),
            created_at: now,
            updated_at: now,
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.state.lock().await.users.len() as i64)
    }

    async fn update_profile(&self, id: Uuid, data: &UpdateProfile) -> AppResult<Option<User>> {
        let mut state = self.state.lock().await;
        Ok(state.users.get_mut(&id).map(|user| {
            if let Some(v) = &data.name {
                user.name = v.clone();
            }
            if let Some(v) = &data.phone_number {
                user.phone_number = Some(v.clone());
            }
            if let Some(v) = &data.location {
                user.location = Some(v.clone());
            }
            if let Some(v) = &data.image {
                user.image = Some(v.clone());
            }
            user.updated_at = Utc::now();
            user.clone()
        }))
    }
}
