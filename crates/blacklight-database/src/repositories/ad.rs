//! Ad repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use blacklight_core::result::AppResult;
use blacklight_entity::ad::{Ad, CreateAd};

use crate::error::map_db_error;
use crate::store::AdStore;

#[derive(Debug, Clone)]
pub struct AdRepository {
    pool: PgPool,
}

impl AdRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdStore for AdRepository {
    async fn list_active(&self, now: DateTime<Utc>) -> AppResult<Vec<Ad>> {
        sqlx::query_as::<_, Ad>(
            r#"SELECT * FROM ads
               WHERE is_permanent OR expires_at IS NULL OR expires_at > $1
               ORDER BY created_at DESC"#,
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to list ads"))
    }

    async fn create(&self, data: &CreateAd) -> AppResult<Ad> {
        sqlx::query_as::<_, Ad>(
            r#"INSERT INTO ads (id, title, description, image, link, is_permanent, expires_at)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING *"#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.image)
        .bind(&data.link)
        .bind(data.is_permanent)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to create ad"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM ads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete ad"))?;
        Ok(result.rows_affected() > 0)
    }
}
