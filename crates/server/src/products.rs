use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::IntoParams;

use crate::errors::ApiError;
use service::errors::ServiceError;
use service::pagination::PageRequest;
use service::product::service as product_service;
use service::product::ProductStore;

/// Shared handler state. The store handle is the only thing requests share;
/// all concurrency control lives behind it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ProductStore>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// 1-based page index
    #[serde(default = "default_page")]
    pub page: u64,
    /// items per page
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}

/// Request body for create and update. A submitted `id` is ignored: the
/// store assigns ids on create and they are immutable afterwards. Unknown
/// fields are ignored as well.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[serde(default)]
    pub id: Option<i32>,
    pub name: String,
    pub last_name: String,
}

fn map_service_error(operation: &str, id: Option<i32>, e: ServiceError) -> ApiError {
    match e {
        ServiceError::Validation(msg) => {
            warn!(operation, id = ?id, message = %msg, "rejected request");
            ApiError::BadRequest(msg)
        }
        ServiceError::NotFound(_) => {
            info!(operation, id = ?id, "product not found");
            ApiError::NotFound
        }
        ServiceError::Db(msg) => {
            error!(operation, id = ?id, err = %msg, "store operation failed");
            ApiError::Internal
        }
    }
}

#[utoipa::path(
    get, path = "/api/product", tag = "product",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of products, newest ids first", body = crate::openapi::ProductPageDoc),
        (status = 400, description = "Non-positive page or pageSize"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<product_service::ProductPage>, ApiError> {
    let req = PageRequest { page: q.page, page_size: q.page_size };
    match product_service::list_products(state.store.as_ref(), req).await {
        Ok(page) => {
            info!(page = q.page, page_size = q.page_size, count = page.products.len(), "listed products");
            Ok(Json(page))
        }
        Err(e) => Err(map_service_error("list", None, e)),
    }
}

#[utoipa::path(
    post, path = "/api/product", tag = "product",
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Created product with assigned id", body = crate::openapi::ProductDoc),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProductInput>,
) -> Result<Json<models::product::Model>, ApiError> {
    match product_service::create_product(state.store.as_ref(), &input.name, &input.last_name).await {
        Ok(m) => {
            info!(id = m.id, "created product");
            Ok(Json(m))
        }
        Err(e) => Err(map_service_error("create", None, e)),
    }
}

#[utoipa::path(
    put, path = "/api/product/{id}", tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Updated product", body = crate::openapi::ProductDoc),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> Result<Json<models::product::Model>, ApiError> {
    match product_service::update_product(state.store.as_ref(), id, &input.name, &input.last_name).await {
        Ok(m) => {
            info!(id = m.id, "updated product");
            Ok(Json(m))
        }
        Err(e) => Err(map_service_error("update", Some(id), e)),
    }
}

#[utoipa::path(
    delete, path = "/api/product/{id}", tag = "product",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deleted product's last known state", body = crate::openapi::ProductDoc),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::product::Model>, ApiError> {
    match product_service::delete_product(state.store.as_ref(), id).await {
        Ok(m) => {
            info!(id = m.id, "deleted product");
            Ok(Json(m))
        }
        Err(e) => Err(map_service_error("delete", Some(id), e)),
    }
}
