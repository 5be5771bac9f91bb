//! Appointments are private to the user who booked them.

use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::appointment::{Appointment, CreateAppointmentRequest, UpdateAppointmentRequest};
use service::auth::Claims;
use service::services::appointment_service;
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
        .route("/:id/cancel", put(cancel))
        .route("/:id/delete", delete(remove))
}

#[utoipa::path(
    get, path = "/api/appointments/all", tag = "appointments",
    responses((status = 200, body = [Appointment])),
    security(("bearer" = []))
)]
pub async fn list(State(state): State<AppState>, Extension(claims): Extension<Claims>) -> ApiResult<Vec<Appointment>> {
    Ok(Json(appointment_service::get_all(&state.db, claims.user_id).await?))
}

#[utoipa::path(
    get, path = "/api/appointments/{id}", tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    responses((status = 200, body = Appointment), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Extension(claims): Extension<Claims>, Path(id): Path<Uuid>) -> ApiResult<Appointment> {
    Ok(Json(appointment_service::get_one(&state.db, claims.user_id, id).await?))
}

#[utoipa::path(
    post, path = "/api/appointments/create", tag = "appointments",
    request_body = CreateAppointmentRequest,
    responses((status = 201, body = Appointment), (status = 400, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(input): ValidatedJson<CreateAppointmentRequest>,
) -> Created<Appointment> {
    Ok(created(appointment_service::create(&state.db, claims.user_id, input).await?))
}

#[utoipa::path(
    put, path = "/api/appointments/{id}/update", tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    request_body = UpdateAppointmentRequest,
    responses((status = 200, body = Appointment), (status = 400, body = common::types::ErrorBody), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(changes): ValidatedJson<UpdateAppointmentRequest>,
) -> ApiResult<Appointment> {
    Ok(Json(appointment_service::update_one(&state.db, claims.user_id, id, changes).await?))
}

/// Mark the appointment CANCELLED; fails once it is cancelled or completed.
#[utoipa::path(
    put, path = "/api/appointments/{id}/cancel", tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    responses((status = 200, body = Appointment), (status = 400, body = common::types::ErrorBody), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn cancel(State(state): State<AppState>, Extension(claims): Extension<Claims>, Path(id): Path<Uuid>) -> ApiResult<Appointment> {
    Ok(Json(appointment_service::cancel(&state.db, claims.user_id, id).await?))
}

#[utoipa::path(
    delete, path = "/api/appointments/{id}/delete", tag = "appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    responses((status = 200, body = Appointment), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(State(state): State<AppState>, Extension(claims): Extension<Claims>, Path(id): Path<Uuid>) -> ApiResult<Appointment> {
    Ok(Json(appointment_service::delete_one(&state.db, claims.user_id, id).await?))
}
