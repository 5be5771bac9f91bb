use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::SignedCookieJar;
use rand::Rng;
use tracing::{debug, warn};

use crate::errors::ApiError;
use crate::state::AppState;

pub const AUTH_COOKIE: &str = "auth_token";

/// Require a valid JWT from `Authorization: Bearer` or the signed
/// `auth_token` cookie; the decoded `Claims` are stored as a request
/// extension.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header_token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    let token = match header_token.or_else(|| jar.get(AUTH_COOKIE).map(|c| c.value().to_string())) {
        Some(t) => t,
        None => {
            warn!(path = %req.uri().path(), "missing Authorization header and auth_token cookie");
            return Err(ApiError::unauthorized("authentication required"));
        }
    };
    let claims = state.tokens.verify(&token).map_err(|e| {
        warn!(path = %req.uri().path(), "token validation failed");
        ApiError::from(e)
    })?;
    debug!(user_id = %claims.user_id, "request authenticated");
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Sleep a random 0..=`latency_jitter_ms` before handling, for exercising
/// client loading states. Disabled at 0.
pub async fn simulate_latency(State(state): State<AppState>, req: Request, next: Next) -> Response {
    if state.latency_jitter_ms > 0 {
        let delay = rand::thread_rng().gen_range(0..=state.latency_jitter_ms);
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    next.run(req).await
}
