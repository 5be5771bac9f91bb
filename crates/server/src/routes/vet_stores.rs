//! Vet-store profiles, nested under `/api/stores/:id/vet-stores`.

use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::store::{CreateVetStoreRequest, UpdateVetStoreRequest, VetStore, VetStoreDetails};
use service::auth::Claims;
use service::services::vet_store_service;
use uuid::Uuid;

use super::{created, ApiResult, Created};
use crate::extract::ValidatedJson;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(list))
        .route("/create", post(create))
        .route("/:profile_id", get(get_one))
        .route("/:profile_id/update", put(update))
        .route("/:profile_id/delete", delete(remove))
}

#[utoipa::path(
    get, path = "/api/stores/{id}/vet-stores/all", tag = "vet-stores",
    params(("id" = Uuid, Path, description = "Store id")),
    responses((status = 200, body = [VetStore])),
    security(("bearer" = []))
)]
pub async fn list(State(state): State<AppState>, Path(store_id): Path<Uuid>) -> ApiResult<Vec<VetStore>> {
    Ok(Json(vet_store_service::get_all(&state.db, store_id).await?))
}

/// Vet store with its vets and services.
#[utoipa::path(
    get, path = "/api/stores/{id}/vet-stores/{profile_id}", tag = "vet-stores",
    params(("id" = Uuid, Path, description = "Store id"), ("profile_id" = Uuid, Path, description = "Vet-store id")),
    responses((status = 200, body = VetStoreDetails), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path((store_id, id)): Path<(Uuid, Uuid)>) -> ApiResult<VetStoreDetails> {
    Ok(Json(vet_store_service::get_one(&state.db, store_id, id).await?))
}

#[utoipa::path(
    post, path = "/api/stores/{id}/vet-stores/create", tag = "vet-stores",
    params(("id" = Uuid, Path, description = "Store id")),
    request_body = CreateVetStoreRequest,
    responses((status = 201, body = VetStoreDetails), (status = 400, body = common::types::ErrorBody), (status = 403, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(store_id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<CreateVetStoreRequest>,
) -> Created<VetStoreDetails> {
    Ok(created(vet_store_service::create(&state.db, claims.user_id, store_id, input).await?))
}

#[utoipa::path(
    put, path = "/api/stores/{id}/vet-stores/{profile_id}/update", tag = "vet-stores",
    params(("id" = Uuid, Path, description = "Store id"), ("profile_id" = Uuid, Path, description = "Vet-store id")),
    request_body = UpdateVetStoreRequest,
    responses((status = 200, body = VetStoreDetails), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((store_id, id)): Path<(Uuid, Uuid)>,
    ValidatedJson(changes): ValidatedJson<UpdateVetStoreRequest>,
) -> ApiResult<VetStoreDetails> {
    Ok(Json(vet_store_service::update_one(&state.db, claims.user_id, store_id, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/stores/{id}/vet-stores/{profile_id}/delete", tag = "vet-stores",
    params(("id" = Uuid, Path, description = "Store id"), ("profile_id" = Uuid, Path, description = "Vet-store id")),
    responses((status = 200, body = VetStore), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((store_id, id)): Path<(Uuid, Uuid)>,
) -> ApiResult<VetStore> {
    Ok(Json(vet_store_service::delete_one(&state.db, claims.user_id, store_id, id).await?))
}
