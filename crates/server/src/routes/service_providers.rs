use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::offering::{
    CreateServiceProviderRequest, ServiceProvider, ServiceProviderDetails, UpdateServiceProviderRequest,
};
use service::auth::Claims;
use service::services::service_provider_service;
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
    get, path = "/api/service-providers/all", tag = "service-providers",
    responses((status = 200, body = [ServiceProvider])),
    security(("bearer" = []))
)]
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<ServiceProvider>> {
    Ok(Json(service_provider_service::get_all(&state.db).await?))
}

#[utoipa::path(
    get, path = "/api/service-providers/{id}", tag = "service-providers",
    params(("id" = Uuid, Path, description = "Service provider id")),
    responses((status = 200, body = ServiceProviderDetails), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<ServiceProviderDetails> {
    Ok(Json(service_provider_service::get_one(&state.db, id).await?))
}

/// Register the caller as a service provider; one profile per user.
#[utoipa::path(
    post, path = "/api/service-providers/create", tag = "service-providers",
    request_body = CreateServiceProviderRequest,
    responses((status = 201, body = ServiceProviderDetails), (status = 400, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(input): ValidatedJson<CreateServiceProviderRequest>,
) -> Created<ServiceProviderDetails> {
    Ok(created(service_provider_service::create(&state.db, claims.user_id, input).await?))
}

#[utoipa::path(
    put, path = "/api/service-providers/{id}/update", tag = "service-providers",
    params(("id" = Uuid, Path, description = "Service provider id")),
    request_body = UpdateServiceProviderRequest,
    responses((status = 200, body = ServiceProviderDetails), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(changes): ValidatedJson<UpdateServiceProviderRequest>,
) -> ApiResult<ServiceProviderDetails> {
    Ok(Json(service_provider_service::update_one(&state.db, claims.user_id, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/service-providers/{id}/delete", tag = "service-providers",
    params(("id" = Uuid, Path, description = "Service provider id")),
    responses((status = 200, body = ServiceProvider), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
) -> ApiResult<ServiceProvider> {
    Ok(Json(service_provider_service::delete_one(&state.db, claims.user_id, id).await?))
}
