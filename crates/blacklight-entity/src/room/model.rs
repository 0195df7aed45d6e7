//! Room entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::RoomType;

/// A gaming room that customers book by the hour.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub room_type: RoomType,
    /// Price per booked hour.
    #[serde(with = "rust_decimal::serde::float")]
    pub hourly_rate: Decimal,
    /// Console model installed in the room (e.g. "PS5").
    pub ps_model: String,
    /// Whether the room currently accepts new bookings.
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a room.
#[derive(Debug, Clone)]
pub struct CreateRoom {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub room_type: RoomType,
    pub hourly_rate: Decimal,
    pub ps_model: String,
    pub is_available: bool,
}

/// Partial room update. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoom {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub room_type: Option<RoomType>,
    pub hourly_rate: Option<Decimal>,
    pub ps_model: Option<String>,
    pub is_available: Option<bool>,
}

impl UpdateRoom {
    /// Apply the changes to an existing room in place.
    pub fn apply_to(&self, room: &mut Room) {
        if let Some(v) = &self.name {
            room.name = v.clone();
        }
        if let Some(v) = &self.description {
            room.description = Some(v.clone());
        }
        if let Some(v) = &self.image {
            room.image = Some(v.clone());
        }
        if let Some(v) = self.room_type {
            room.room_type = v;
        }
        if let Some(v) = self.hourly_rate {
            room.hourly_rate = v;
        }
        if let Some(v) = &self.ps_model {
            room.ps_model = v.clone();
        }
        if let Some(v) = self.is_available {
            room.is_available = v;
        }
    }
}
