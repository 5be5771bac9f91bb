use axum::Router;
use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Connect, bring the schema up to date and assemble the shared state.
pub async fn build_state(config: &AppConfig) -> Result<AppState, StartupError> {
    let db = models::db::connect_with_config(&config.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    Migrator::up(&db, None)
        .await
        .map_err(|e| StartupError::Database(format!("migrations failed: {e}")))?;
    info!(event = "migrations_applied", "database schema is up to date");
    AppState::new(db, &config.auth, config.server.latency_jitter_ms)
}

pub async fn build_app(config: &AppConfig) -> Result<Router, StartupError> {
    let state = build_state(config).await?;
    Ok(routes::build_router(state))
}

/// Serve the API on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, config: &AppConfig) -> anyhow::Result<()> {
    let app = build_app(config).await?;
    let addr = listener.local_addr()?;
    info!(%addr, environment = ?config.environment, "petcare api listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Public entry: bind the configured address and run the HTTP server.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    serve(listener, &config).await
}
