use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::vet::{CreateVetRequest, UpdateVetRequest, Vet};
use service::auth::Claims;
use service::services::vet_service;
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

#[utoipa::path(get, path = "/api/vets/all", tag = "vets", responses((status = 200, body = [Vet])), security(("bearer" = [])))]
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Vet>> {
    Ok(Json(vet_service::get_all(&state.db).await?))
}

#[utoipa::path(
    get, path = "/api/vets/{id}", tag = "vets",
    params(("id" = Uuid, Path, description = "Vet id")),
    responses((status = 200, body = Vet), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Vet> {
    Ok(Json(vet_service::get_one(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/vets/create", tag = "vets",
    request_body = CreateVetRequest,
    responses((status = 201, body = Vet), (status = 400, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(State(state): State<AppState>, ValidatedJson(input): ValidatedJson<CreateVetRequest>) -> Created<Vet> {
    Ok(created(vet_service::create(&state.db, input).await?))
}

#[utoipa::path(
    put, path = "/api/vets/{id}/update", tag = "vets",
    params(("id" = Uuid, Path, description = "Vet id")),
    request_body = UpdateVetRequest,
    responses((status = 200, body = Vet), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(changes): ValidatedJson<UpdateVetRequest>,
) -> ApiResult<Vet> {
    Ok(Json(vet_service::update_one(&state.db, claims.user_id, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/vets/{id}/delete", tag = "vets",
    params(("id" = Uuid, Path, description = "Vet id")),
    responses((status = 200, body = Vet), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(State(state): State<AppState>, Extension(claims): Extension<Claims>, Path(id): Path<Uuid>) -> ApiResult<Vet> {
    Ok(Json(vet_service::delete_one(&state.db, claims.user_id, id).await?))
}
