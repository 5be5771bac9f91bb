use axum::extract::{Path, Query, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use common::types::review::{CreateReviewRequest, Review, ReviewListQuery, UpdateReviewRequest};
use service::auth::Claims;
use service::services::review_service;
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
    get, path = "/api/reviews/all", tag = "reviews",
    params(
        ("productId" = Option<Uuid>, Query, description = "Reviews of this product"),
        ("storeId" = Option<Uuid>, Query, description = "Reviews of this store"),
        ("serviceProviderId" = Option<Uuid>, Query, description = "Reviews of this service provider")
    ),
    responses((status = 200, body = [Review])),
    security(("bearer" = []))
)]
pub async fn list(State(state): State<AppState>, Query(query): Query<ReviewListQuery>) -> ApiResult<Vec<Review>> {
    Ok(Json(review_service::get_all(&state.db, query).await?))
}

#[utoipa::path(
    get, path = "/api/reviews/{id}", tag = "reviews",
    params(("id" = Uuid, Path, description = "Review id")),
    responses((status = 200, body = Review), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<Review> {
    Ok(Json(review_service::get_one(&state.db, id).await?))
}

/// Review a product, store or service provider. Product reviews refresh the
/// product's average rating.
#[utoipa::path(
    post, path = "/api/reviews/create", tag = "reviews",
    request_body = CreateReviewRequest,
    responses((status = 201, body = Review), (status = 400, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ValidatedJson(input): ValidatedJson<CreateReviewRequest>,
) -> Created<Review> {
    Ok(created(review_service::create(&state.db, claims.user_id, input).await?))
}

#[utoipa::path(
    put, path = "/api/reviews/{id}/update", tag = "reviews",
    params(("id" = Uuid, Path, description = "Review id")),
    request_body = UpdateReviewRequest,
    responses((status = 200, body = Review), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(changes): ValidatedJson<UpdateReviewRequest>,
) -> ApiResult<Review> {
    Ok(Json(review_service::update_one(&state.db, claims.user_id, id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/reviews/{id}/delete", tag = "reviews",
    params(("id" = Uuid, Path, description = "Review id")),
    responses((status = 200, body = Review), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(State(state): State<AppState>, Extension(claims): Extension<Claims>, Path(id): Path<Uuid>) -> ApiResult<Review> {
    Ok(Json(review_service::delete_one(&state.db, claims.user_id, id).await?))
}
