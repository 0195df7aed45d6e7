//! Admin dashboard handler.

use axum::Json;
use axum::extract::State;

use blacklight_service::report::DashboardSummary;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/dashboard (admin)
pub async fn summary(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<DashboardSummary>>> {
    require_admin(&auth)?;
    let summary = state.dashboard_service.summary(&auth).await?;
    Ok(Json(ApiResponse::ok(summary)))
}
