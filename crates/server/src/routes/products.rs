use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::product::{CreateProductRequest, Product, ProductDetails, ProductListQuery, UpdateProductRequest};
use common::types::Page;
use service::auth::Claims;
use service::services::product_service;
use uuid::Uuid;

use super::{created, ApiResult, Created};
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(list))
        .route("/create", post(create))
        .route("/:id", get(get_one))
        .route("/:id/update", put(update))
        .route("/:id/delete", delete(remove))
}

#[utoipa::path(
    get, path = "/api/products/all", tag = "products",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("storeId" = Option<Uuid>, Query, description = "Only products of this store"),
        ("category" = Option<common::types::ProductCategory>, Query, description = "Only this category")
    ),
    responses((status = 200, body = common::types::ProductPage)),
    security(("bearer" = []))
)]
pub async fn list(State(state): State<AppState>, Query(query): Query<ProductListQuery>) -> ApiResult<Page<Product>> {
    Ok(Json(product_service::get_all(&state.db, query).await?))
}

/// Product with its reviews.
#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = Uuid, Path, description = "Product id")),
    responses((status = 200, body = ProductDetails), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<ProductDetails> {
    Ok(Json(product_service::get_one(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/products/create", tag = "products",
    request_body = CreateProductRequest,
    responses((status = 201, body = Product), (status = 400, body = common::types::ErrorBody), (status = 403, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(input): ValidatedJson<CreateProductRequest>,
) -> Created<Product> {
    Ok(created(product_service::create(&state.db, claims.user_id, input).await?))
}

#[utoipa::path(
    put, path = "/api/products/{id}/update", tag = "products",
    params(("id" = Uuid, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses((status = 200, body = Product), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(changes): ValidatedJson<UpdateProductRequest>,
) -> ApiResult<Product> {
    Ok(Json(product_service::update_one(&state.db, claims.user_id, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/products/{id}/delete", tag = "products",
    params(("id" = Uuid, Path, description = "Product id")),
    responses((status = 200, body = Product), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(State(state): State<AppState>, Extension(claims): Extension<Claims>, Path(id): Path<Uuid>) -> ApiResult<Product> {
    Ok(Json(product_service::delete_one(&state.db, claims.user_id, id).await?))
}
