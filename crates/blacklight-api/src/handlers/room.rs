//! Room catalog and availability handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use blacklight_entity::room::Room;
use blacklight_service::booking::RoomAvailability;

use crate::dto::request::{AvailabilityQuery, CreateRoomRequest, UpdateRoomRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/rooms
pub async fn list_rooms(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Room>>>> {
    let rooms = state.room_service.list().await?;
    Ok(Json(ApiResponse::ok(rooms)))
}

/// GET /api/rooms/{id}
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Room>>> {
    let room = state.room_service.get(id).await?;
    Ok(Json(ApiResponse::ok(room)))
}

/// GET /api/rooms/{id}/availability?date=YYYY-MM-DD
pub async fn room_availability(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> ApiResult<Json<ApiResponse<RoomAvailability>>> {
    let availability = state.booking_service.availability(id, query.date).await?;
    Ok(Json(ApiResponse::ok(availability)))
}

/// POST /api/rooms (admin)
pub async fn create_room(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateRoomRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Room>>)> {
    require_admin(&auth)?;
    let room = state.room_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(room))))
}

/// PUT /api/rooms/{id} (admin)
pub async fn update_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateRoomRequest>,
) -> ApiResult<Json<ApiResponse<Room>>> {
    require_admin(&auth)?;
    let room = state.room_service.update(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(room)))
}

/// DELETE /api/rooms/{id} (admin)
pub async fn delete_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    require_admin(&auth)?;
    state.room_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Room deleted"))))
}
