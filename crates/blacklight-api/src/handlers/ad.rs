//! Ad handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use blacklight_entity::ad::Ad;

use crate::dto::request::CreateAdRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/ads
pub async fn list_ads(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Ad>>>> {
    let ads = state.ad_service.list_active().await?;
    Ok(Json(ApiResponse::ok(ads)))
}

/// POST /api/ads (admin)
pub async fn create_ad(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateAdRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Ad>>)> {
    require_admin(&auth)?;
    let ad = state.ad_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(ad))))
}

/// DELETE /api/ads/{id} (admin)
pub async fn delete_ad(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    require_admin(&auth)?;
    state.ad_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Ad deleted"))))
}
