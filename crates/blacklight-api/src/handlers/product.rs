//! Café product handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use blacklight_entity::product::Product;

use crate::dto::request::{CreateProductRequest, ProductQuery, UpdateProductRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/products?category=Drink
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> ApiResult<Json<ApiResponse<Vec<Product>>>> {
    let products = state.product_service.list(query.category).await?;
    Ok(Json(ApiResponse::ok(products)))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Product>>> {
    let product = state.product_service.get(id).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// POST /api/products (admin)
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Product>>)> {
    require_admin(&auth)?;
    let product = state.product_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(product))))
}

/// PUT /api/products/{id} (admin)
pub async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<Json<ApiResponse<Product>>> {
    require_admin(&auth)?;
    let product = state.product_service.update(&auth, id, req.into()).await?;
    Ok(Json(ApiResponse::ok(product)))
}

/// DELETE /api/products/{id} (admin)
pub async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    require_admin(&auth)?;
    state.product_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Product deleted"))))
}
