//! Bookable services (`/api/services`), linked to providers and vet stores.

use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::offering::{CreateOfferingRequest, Offering, OfferingDetails, UpdateOfferingRequest};
use service::auth::Claims;
use service::services::offering_service;
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

#[utoipa::path(get, path = "/api/services/all", tag = "services", responses((status = 200, body = [Offering])), security(("bearer" = [])))]
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Offering>> {
    Ok(Json(offering_service::get_all(&state.db).await?))
}

#[utoipa::path(
    get, path = "/api/services/{id}", tag = "services",
    params(("id" = Uuid, Path, description = "Service id")),
    responses((status = 200, body = OfferingDetails), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<OfferingDetails> {
    Ok(Json(offering_service::get_one(&state.db, id).await?))
}

/// Create a service and connect the listed providers and vet stores, all of
/// which must belong to the caller.
#[utoipa::path(
    post, path = "/api/services/create", tag = "services",
    request_body = CreateOfferingRequest,
    responses((status = 201, body = OfferingDetails), (status = 400, body = common::types::ErrorBody), (status = 403, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(input): ValidatedJson<CreateOfferingRequest>,
) -> Created<OfferingDetails> {
    Ok(created(offering_service::create(&state.db, claims.user_id, input).await?))
}

#[utoipa::path(
    put, path = "/api/services/{id}/update", tag = "services",
    params(("id" = Uuid, Path, description = "Service id")),
    request_body = UpdateOfferingRequest,
    responses((status = 200, body = OfferingDetails), (status = 400, body = common::types::ErrorBody), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(changes): ValidatedJson<UpdateOfferingRequest>,
) -> ApiResult<OfferingDetails> {
    Ok(Json(offering_service::update_one(&state.db, claims.user_id, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/services/{id}/delete", tag = "services",
    params(("id" = Uuid, Path, description = "Service id")),
    responses((status = 200, body = Offering), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> ApiResult<Offering> {
    Ok(Json(offering_service::delete_one(&state.db, claims.user_id, id).await?))
}
