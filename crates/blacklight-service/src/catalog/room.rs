//! Gaming room catalog.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use blacklight_core::error::AppError;
use blacklight_core::result::AppResult;
use blacklight_database::store::RoomStore;
use blacklight_entity::room::{CreateRoom, Room, UpdateRoom};

use crate::context::RequestContext;

#[derive(Clone)]
pub struct RoomService {
    rooms: Arc<dyn RoomStore>,
}

impl RoomService {
    pub fn new(rooms: Arc<dyn RoomStore>) -> Self {
        Self { rooms }
    }

    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.rooms.list().await
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Room> {
        self.rooms
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))
    }

    pub async fn create(&self, ctx: &RequestContext, mut data: CreateRoom) -> AppResult<Room> {
        data.name = required_name(&data.name)?;
        ensure_rate(data.hourly_rate)?;

        let room = self.rooms.create(&data).await?;
        info!(room_id = %room.id, name = %room.name, rate = %room.hourly_rate, by = %ctx.user_id, "Room created");
        Ok(room)
    }

    pub async fn update(&self, ctx: &RequestContext, id: Uuid, mut data: UpdateRoom) -> AppResult<Room> {
        if let Some(name) = &data.name {
            data.name = Some(required_name(name)?);
        }
        if let Some(rate) = data.hourly_rate {
            ensure_rate(rate)?;
        }

        let room = self
            .rooms
            .update(id, &data)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Room {id} not found")))?;
        info!(room_id = %id, by = %ctx.user_id, "Room updated");
        Ok(room)
    }

    /// Rooms with booking history cannot be deleted; mark them unavailable instead.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if !self.rooms.delete(id).await? {
            return Err(AppError::not_found(format!("Room {id} not found")));
        }
        info!(room_id = %id, by = %ctx.user_id, "Room deleted");
        Ok(())
    }
}

fn required_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::validation("Room name must not be empty"));
    }
    Ok(name.to_string())
}

fn ensure_rate(rate: Decimal) -> AppResult<()> {
    if rate <= Decimal::ZERO {
        return Err(AppError::validation("Hourly rate must be greater than zero"));
    }
    Ok(())
}
