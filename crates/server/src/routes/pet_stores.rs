//! Pet-store profiles, nested under `/api/stores/:id/pet-stores`.

use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::store::{CreatePetStoreRequest, PetStore, UpdatePetStoreRequest};
use service::auth::Claims;
use service::services::pet_store_service;
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
    get, path = "/api/stores/{id}/pet-stores/all", tag = "pet-stores",
    params(("id" = Uuid, Path, description = "Store id")),
    responses((status = 200, body = [PetStore]), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn list(State(state): State<AppState>, Path(store_id): Path<Uuid>) -> ApiResult<Vec<PetStore>> {
    Ok(Json(pet_store_service::get_all(&state.db, store_id).await?))
}

#[utoipa::path(
    get, path = "/api/stores/{id}/pet-stores/{profile_id}", tag = "pet-stores",
    params(("id" = Uuid, Path, description = "Store id"), ("profile_id" = Uuid, Path, description = "Pet-store id")),
    responses((status = 200, body = PetStore), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path((store_id, id)): Path<(Uuid, Uuid)>) -> ApiResult<PetStore> {
    Ok(Json(pet_store_service::get_one(&state.db, store_id, id).await?))
}

/// Attach the pet-store profile to a PET_STORE store owned by the caller.
#[utoipa::path(
    post, path = "/api/stores/{id}/pet-stores/create", tag = "pet-stores",
    params(("id" = Uuid, Path, description = "Store id")),
    request_body = CreatePetStoreRequest,
    responses((status = 201, body = PetStore), (status = 400, body = common::types::ErrorBody), (status = 403, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(store_id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<CreatePetStoreRequest>,
) -> Created<PetStore> {
    Ok(created(pet_store_service::create(&state.db, claims.user_id, store_id, input).await?))
}

#[utoipa::path(
    put, path = "/api/stores/{id}/pet-stores/{profile_id}/update", tag = "pet-stores",
    params(("id" = Uuid, Path, description = "Store id"), ("profile_id" = Uuid, Path, description = "Pet-store id")),
    request_body = UpdatePetStoreRequest,
    responses((status = 200, body = PetStore), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((store_id, id)): Path<(Uuid, Uuid)>,
    ValidatedJson(changes): ValidatedJson<UpdatePetStoreRequest>,
) -> ApiResult<PetStore> {
    Ok(Json(pet_store_service::update_one(&state.db, claims.user_id, store_id, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/stores/{id}/pet-stores/{profile_id}/delete", tag = "pet-stores",
    params(("id" = Uuid, Path, description = "Store id"), ("profile_id" = Uuid, Path, description = "Pet-store id")),
    responses((status = 200, body = PetStore), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path((store_id, id)): Path<(Uuid, Uuid)>,
) -> ApiResult<PetStore> {
    Ok(Json(pet_store_service::delete_one(&state.db, claims.user_id, store_id, id).await?))
}
