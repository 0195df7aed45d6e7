//! Ad management and the public active-ad feed.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_database::store::AdStore;
use blacklight_entity::ad::{Ad, CreateAd};

use crate::context::RequestContext;

#[derive(Clone)]
pub struct AdService {
    ads: Arc<dyn AdStore>,
}

impl AdService {
    pub fn new(ads: Arc<dyn AdStore>) -> Self {
        Self { ads }
    }

    /// Ads currently shown to visitors.
    pub async fn list_active(&self) -> AppResult<Vec<Ad>> {
        self.ads.list_active(Utc::now()).await
    }

    pub async fn create(&self, ctx: &RequestContext, mut data: CreateAd) -> AppResult<Ad> {
        let title = data.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Ad title must not be empty"));
        }
        data.title = title.to_string();
        if data.is_permanent {
            data.expires_at = None;
        } else if data.expires_at.is_some_and(|at| at <= ctx.request_time) {
            return Err(AppError::validation("Expiry must be in the future"));
        }

        let ad = self.ads.create(&data).await?;
        info!(ad_id = %ad.id, permanent = ad.is_permanent, by = %ctx.user_id, "Ad created");
        Ok(ad)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if !self.ads.delete(id).await? {
            return Err(AppError::not_found(format!("Ad {id} not found")));
        }
        info!(ad_id = %id, by = %ctx.user_id, "Ad deleted");
        Ok(())
    }
}
