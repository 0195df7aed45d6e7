//! Ad entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A promotional banner.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ad {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    /// Permanent ads never expire.
    pub is_permanent: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Ad {
    /// An ad is shown if it is permanent, has no expiry, or expires after `now`.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.is_permanent || self.expires_at.is_none_or(|at| at > now)
    }
}

/// Data required to create an ad.
#[derive(Debug, Clone)]
pub struct CreateAd {
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub is_permanent: bool,
    pub expires_at: Option<DateTime<Utc>>,
}
