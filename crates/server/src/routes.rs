use axum::http::StatusCode;
use axum::{middleware, routing::get, Json, Router};
use common::types::Health;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::ApiError;
use crate::middleware::{require_auth, simulate_latency};
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod appointments;
pub mod locations;
pub mod pet_stores;
pub mod pets;
pub mod products;
pub mod reviews;
pub mod service_providers;
pub mod services;
pub mod stores;
pub mod users;
pub mod vet_stores;
pub mod vets;

pub type ApiResult<T> = Result<Json<T>, ApiError>;
pub type Created<T> = Result<(StatusCode, Json<T>), ApiError>;

pub(crate) fn created<T>(value: T) -> (StatusCode, Json<T>) { (StatusCode::CREATED, Json(value)) }

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public, authenticated and docs routes
/// plus CORS, tracing and the optional latency layer.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .nest("/api/users", users::public_routes());

    let protected = Router::new()
        .nest("/api/users", users::routes())
        .nest("/api/pets", pets::routes())
        .nest("/api/stores", stores::routes())
        .nest("/api/stores/:id/pet-stores", pet_stores::routes())
        .nest("/api/stores/:id/vet-stores", vet_stores::routes())
        .nest("/api/vets", vets::routes())
        .nest("/api/products", products::routes())
        .nest("/api/services", services::routes())
        .nest("/api/service-providers", service_providers::routes())
        .nest("/api/reviews", reviews::routes())
        .nest("/api/appointments", appointments::routes())
        .nest("/api/locations", locations::routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public
        .merge(protected)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(middleware::from_fn_with_state(state.clone(), simulate_latency))
        .with_state(state)
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
