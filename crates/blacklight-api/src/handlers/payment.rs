//! Payment confirmation handler.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use blacklight_entity::payment::PaymentTarget;
use blacklight_service::payment::PaymentConfirmation;

use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/payments/{target}/{id}/mark-paid
///
/// `target` is `order` or `booking`. Repeating the call is harmless.
pub async fn mark_paid(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((target, id)): Path<(String, Uuid)>,
) -> ApiResult<Json<ApiResponse<PaymentConfirmation>>> {
    let target: PaymentTarget = target.parse()?;
    let confirmation = state.payment_service.mark_paid(&auth, target, id).await?;
    Ok(Json(ApiResponse::ok(confirmation)))
}
