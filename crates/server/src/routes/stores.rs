use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::store::{CreateStoreRequest, Store, StoreDetails, StoreListQuery, UpdateStoreRequest};
use common::types::Page;
use service::auth::Claims;
use service::services::store_service;
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
    get, path = "/api/stores/all", tag = "stores",
    params(
        ("page" = Option<u64>, Query, description = "1-based page number"),
        ("storeType" = Option<common::types::StoreType>, Query, description = "PET_STORE or VET_STORE")
    ),
    responses((status = 200, body = common::types::StorePage)),
    security(("bearer" = []))
)]
pub async fn list(State(state): State<AppState>, Query(query): Query<StoreListQuery>) -> ApiResult<Page<Store>> {
    Ok(Json(store_service::get_all(&state.db, query).await?))
}

/// Store with its sub-profile, location and products.
#[utoipa::path(
    get, path = "/api/stores/{id}", tag = "stores",
    params(("id" = Uuid, Path, description = "Store id")),
    responses((status = 200, body = StoreDetails), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StoreDetails> {
    Ok(Json(store_service::get_one(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/stores/create", tag = "stores",
    request_body = CreateStoreRequest,
    responses((status = 201, body = Store), (status = 400, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(input): ValidatedJson<CreateStoreRequest>,
) -> Created<Store> {
    Ok(created(store_service::create(&state.db, claims.user_id, input).await?))
}

#[utoipa::path(
    put, path = "/api/stores/{id}/update", tag = "stores",
    params(("id" = Uuid, Path, description = "Store id")),
    request_body = UpdateStoreRequest,
    responses((status = 200, body = Store), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(changes): ValidatedJson<UpdateStoreRequest>,
) -> ApiResult<Store> {
    Ok(Json(store_service::update_one(&state.db, claims.user_id, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/stores/{id}/delete", tag = "stores",
    params(("id" = Uuid, Path, description = "Store id")),
    responses((status = 200, body = Store), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(State(state): State<AppState>, Extension(claims): Extension<Claims>, Path(id): Path<Uuid>) -> ApiResult<Store> {
    Ok(Json(store_service::delete_one(&state.db, claims.user_id, id).await?))
}
