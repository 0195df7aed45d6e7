//! Order handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use blacklight_core::types::PageResponse;
use blacklight_entity::order::Order;

use crate::dto::request::{PlaceOrderRequest, UpdateOrderStatusRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams, ValidatedJson};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Order>>>> {
    let page = state
        .order_service
        .list(&auth, &params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/orders
pub async fn place_order(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<PlaceOrderRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Order>>)> {
    let order = state.order_service.place_order(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(order))))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Order>>> {
    let order = state.order_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(order)))
}

/// PATCH /api/orders/{id}/status (admin)
pub async fn update_order_status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateOrderStatusRequest>,
) -> ApiResult<Json<ApiResponse<Order>>> {
    require_admin(&auth)?;
    let order = state
        .order_service
        .update_status(&auth, id, req.status)
        .await?;
    Ok(Json(ApiResponse::ok(order)))
}
