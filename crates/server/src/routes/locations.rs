use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::location::{CreateLocationRequest, Location, LocationListQuery, UpdateLocationRequest};
use service::auth::Claims;
use service::services::location_service;
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
    get, path = "/api/locations/all", tag = "locations",
    params(
        ("userId" = Option<Uuid>, Query, description = "Location of this user"),
        ("storeId" = Option<Uuid>, Query, description = "Location of this store")
    ),
    responses((status = 200, body = [Location])),
    security(("bearer" = []))
)]
pub async fn list(State(state): State<AppState>, Query(query): Query<LocationListQuery>) -> ApiResult<Vec<Location>> {
    Ok(Json(location_service::get_all(&state.db, query).await?))
}

#[utoipa::path(
    get, path = "/api/locations/{id}", tag = "locations",
    params(("id" = Uuid, Path, description = "Location id")),
    responses((status = 200, body = Location), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Location> {
    Ok(Json(location_service::get_one(&state.db, id).await?))
}

/// Pin either the caller or one of the caller's stores to coordinates.
#[utoipa::path(
    post, path = "/api/locations/create", tag = "locations",
    request_body = CreateLocationRequest,
    responses((status = 201, body = Location), (status = 400, body = common::types::ErrorBody), (status = 403, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(input): ValidatedJson<CreateLocationRequest>,
) -> Created<Location> {
    Ok(created(location_service::create(&state.db, claims.user_id, input).await?))
}

#[utoipa::path(
    put, path = "/api/locations/{id}/update", tag = "locations",
    params(("id" = Uuid, Path, description = "Location id")),
    request_body = UpdateLocationRequest,
    responses((status = 200, body = Location), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(changes): ValidatedJson<UpdateLocationRequest>,
) -> ApiResult<Location> {
    Ok(Json(location_service::update_one(&state.db, claims.user_id, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/locations/{id}/delete", tag = "locations",
    params(("id" = Uuid, Path, description = "Location id")),
    responses((status = 200, body = Location), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(State(state): State<AppState>, Extension(claims): Extension<Claims>, Path(id): Path<Uuid>) -> ApiResult<Location> {
    Ok(Json(location_service::delete_one(&state.db, claims.user_id, id).await?))
}
