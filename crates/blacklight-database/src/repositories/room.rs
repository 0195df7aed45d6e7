//! Room repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use blacklight_core::result::AppResult;
use blacklight_entity::room::{CreateRoom, Room, UpdateRoom};

use crate::error::map_db_error;
use crate::store::RoomStore;

#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
}

impl RoomRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomStore for RoomRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to find room"))
    }

    async fn list(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to list rooms"))
    }

    async fn create(&self, data: &CreateRoom) -> AppResult<Room> {
        sqlx::query_as::<_, Room>(
            r#"INSERT INTO rooms (id, name, description, image, room_type, hourly_rate, ps_model, is_available)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
               RETURNING *"#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image)
        .bind(data.room_type)
        .bind(data.hourly_rate)
        .bind(&data.ps_model)
        .bind(data.is_available)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to create room"))
    }

    async fn update(&self, id: Uuid, data: &UpdateRoom) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, Room>(
            r#"UPDATE rooms SET
                   name = COALESCE($2, name),
                   description = COALESCE($3, description),
                   image = COALESCE($4, image),
                   room_type = COALESCE($5, room_type),
                   hourly_rate = COALESCE($6, hourly_rate),
                   ps_model = COALESCE($7, ps_model),
                   is_available = COALESCE($8, is_available),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image)
        .bind(data.room_type)
        .bind(data.hourly_rate)
        .bind(&data.ps_model)
        .bind(data.is_available)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_db_error(e, "Failed to update room"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_db_error(e, "Failed to delete room"))?;
        Ok(result.rows_affected() > 0)
    }
}
