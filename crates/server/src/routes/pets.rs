use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::pet::{CreatePetRequest, Pet, UpdatePetRequest};
use service::auth::Claims;
use service::services::pet_service;
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

/// Pets of the authenticated user.
#[utoipa::path(get, path = "/api/pets/all", tag = "pets", responses((status = 200, body = [Pet])), security(("bearer" = [])))]
pub async fn list(State(state): State<AppState>, Extension(claims): Extension<Claims>) -> ApiResult<Vec<Pet>> {
    Ok(Json(pet_service::get_all(&state.db, claims.user_id).await?))
}

#[utoipa::path(
    get, path = "/api/pets/{id}", tag = "pets",
    params(("id" = Uuid, Path, description = "Pet id")),
    responses((status = 200, body = Pet), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Pet> {
    Ok(Json(pet_service::get_one(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/pets/create", tag = "pets",
    request_body = CreatePetRequest,
    responses((status = 201, body = Pet), (status = 400, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(input): ValidatedJson<CreatePetRequest>,
) -> Created<Pet> {
    Ok(created(pet_service::create(&state.db, claims.user_id, input).await?))
}

#[utoipa::path(
    put, path = "/api/pets/{id}/update", tag = "pets",
    params(("id" = Uuid, Path, description = "Pet id")),
    request_body = UpdatePetRequest,
    responses((status = 200, body = Pet), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(changes): ValidatedJson<UpdatePetRequest>,
) -> ApiResult<Pet> {
    Ok(Json(pet_service::update_one(&state.db, claims.user_id, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/pets/{id}/delete", tag = "pets",
    params(("id" = Uuid, Path, description = "Pet id")),
    responses((status = 200, body = Pet), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(State(state): State<AppState>, Extension(claims): Extension<Claims>, Path(id): Path<Uuid>) -> ApiResult<Pet> {
    Ok(Json(pet_service::delete_one(&state.db, claims.user_id, id).await?))
}
