use axum::extract::{Path, State};
use axum::routing::{delete, get, post, put};
use axum::{Extension, Json, Router};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use common::types::user::{AuthResponse, CreateUserRequest, LoginRequest, UpdateUserRequest, UserProfile};
use service::auth::Claims;
use tracing::info;
use uuid::Uuid;

use super::{created, ApiResult, Created};
use crate::errors::ApiError;
use crate::extract::ValidatedJson;
use crate::middleware::AUTH_COOKIE;
use crate::state::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new().route("/create", post(create)).route("/login", post(login))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/all", get(list))
        .route("/me", get(me))
        .route("/:id", get(get_one))
        .route("/:id/update", put(update))
        .route("/:id/delete", delete(remove))
}

fn ensure_self(claims: &Claims, id: Uuid, action: &str) -> Result<(), ApiError> {
    if claims.user_id != id {
        return Err(ApiError::forbidden(format!("not allowed to {action}")));
    }
    Ok(())
}

#[utoipa::path(
    post, path = "/api/users/create", tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, body = AuthResponse),
        (status = 400, body = common::types::ErrorBody)
    )
)]
pub async fn create(State(state): State<AppState>, ValidatedJson(input): ValidatedJson<CreateUserRequest>) -> Created<AuthResponse> {
    let out = state.users.create(input).await?;
    Ok(created(out))
}

/// Verify credentials, return `{ token, user }` and set the signed
/// `auth_token` cookie.
#[utoipa::path(
    post, path = "/api/users/login", tag = "users",
    request_body = LoginRequest,
    responses(
        (status = 200, body = AuthResponse),
        (status = 401, body = common::types::ErrorBody),
        (status = 404, body = common::types::ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    ValidatedJson(input): ValidatedJson<LoginRequest>,
) -> Result<(SignedCookieJar, Json<AuthResponse>), ApiError> {
    let out = state.users.login(input).await?;
    let cookie = Cookie::build((AUTH_COOKIE, out.token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    info!(user_id = %out.user.id, "login cookie issued");
    Ok((jar.add(cookie), Json(out)))
}

#[utoipa::path(
    get, path = "/api/users/me", tag = "users",
    responses((status = 200, body = UserProfile), (status = 401, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn me(State(state): State<AppState>, Extension(claims): Extension<Claims>) -> ApiResult<UserProfile> {
    Ok(Json(state.users.get_by_token(&claims).await?))
}

#[utoipa::path(
    get, path = "/api/users/all", tag = "users",
    responses((status = 200, body = [UserProfile]), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<UserProfile>> {
    Ok(Json(state.users.get_all().await?))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses((status = 200, body = UserProfile), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn get_one(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<UserProfile> {
    Ok(Json(state.users.get_one(id).await?))
}

#[utoipa::path(
    put, path = "/api/users/{id}/update", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses((status = 200, body = UserProfile), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    ValidatedJson(changes): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<UserProfile> {
    ensure_self(&claims, id, "update this user")?;
    Ok(Json(state.users.update_one(id, changes).await?))
}

#[utoipa::path(
    delete, path = "/api/users/{id}/delete", tag = "users",
    params(("id" = Uuid, Path, description = "User id")),
    responses((status = 200, body = UserProfile), (status = 403, body = common::types::ErrorBody), (status = 404, body = common::types::ErrorBody)),
    security(("bearer" = []))
)]
pub async fn remove(State(state): State<AppState>, Extension(claims): Extension<Claims>, Path(id): Path<Uuid>) -> ApiResult<UserProfile> {
    ensure_self(&claims, id, "delete this user")?;
    Ok(Json(state.users.delete_one(id).await?))
}
