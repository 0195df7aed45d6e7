//! User profile and admin listing handlers.

use axum::Json;
use axum::extract::{Query, State};

use blacklight_core::types::PageResponse;
use blacklight_entity::user::User;

use crate::dto::request::UpdateProfileRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/users (admin)
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<User>>>> {
    require_admin(&auth)?;
    let page = state
        .user_service
        .list(&params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// PUT /api/users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let user = state.user_service.update_me(&auth, req.into()).await?;
    Ok(Json(ApiResponse::ok(user)))
}
