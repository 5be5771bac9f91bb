use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use configs::AuthConfig;
use sea_orm::DatabaseConnection;
use service::auth::{Argon2Hasher, TokenIssuer};
use service::users::{SeaOrmUserRepository, UserService};

use crate::errors::StartupError;

pub type Users = UserService<SeaOrmUserRepository, Argon2Hasher>;

/// Shared by every handler; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub users: Arc<Users>,
    pub tokens: TokenIssuer,
    pub cookie_key: Key,
    /// Upper bound of the artificial per-request delay; 0 disables it.
    pub latency_jitter_ms: u64,
}

impl AppState {
    pub fn new(db: DatabaseConnection, auth: &AuthConfig, latency_jitter_ms: u64) -> Result<Self, StartupError> {
        if auth.cookie_secret.len() < 32 {
            return Err(StartupError::InvalidConfig("auth.cookie_secret must be at least 32 bytes".into()));
        }
        let tokens = TokenIssuer::from_config(auth);
        let users = UserService::new(
            Arc::new(SeaOrmUserRepository::new(db.clone())),
            Arc::new(Argon2Hasher),
            tokens.clone(),
        );
        Ok(Self {
            db,
            users: Arc::new(users),
            tokens,
            cookie_key: Key::derive_from(auth.cookie_secret.as_bytes()),
            latency_jitter_ms,
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self { state.cookie_key.clone() }
}
