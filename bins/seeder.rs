//! Fill a running API with mock users, stores, products and bookings.
//!
//! `PETCARE_API_URL` picks the target (default: the configured bind address);
//! `SEED_CUSTOMERS` and `SEED_VALUE` tune the volume and the content seed.

use std::process::ExitCode;

use client::seed::{seed, SeedOptions};
use client::ApiClient;
use configs::AppConfig;
use dotenvy::dotenv;
use tracing::{error, info};

fn env_number<T: std::str::FromStr>(key: &str) -> Option<T> { std::env::var(key).ok().and_then(|v| v.parse().ok()) }

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let base_url = std::env::var("PETCARE_API_URL").unwrap_or_else(|_| {
        let server = AppConfig::load_and_validate().map(|c| c.server).unwrap_or_default();
        format!("http://{}", server.bind_addr())
    });
    let mut opts = SeedOptions::default();
    if let Some(n) = env_number("SEED_CUSTOMERS") {
        opts.customers = n;
    }
    if let Some(s) = env_number("SEED_VALUE") {
        opts.seed = s;
    }

    let api = match ApiClient::new(&base_url) {
        Ok(api) => api,
        Err(e) => {
            error!(event = "client_init_failed", error = %e, "cannot build api client");
            return ExitCode::FAILURE;
        }
    };
    match api.health().await {
        Ok(true) => {}
        Ok(false) | Err(_) => {
            error!(event = "server_unreachable", %base_url, "api health check failed");
            return ExitCode::FAILURE;
        }
    }

    match seed(&api, &opts).await {
        Ok(report) => {
            info!(event = "seed_done", %base_url, ?report, "mock data created");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(event = "seed_failed", error = %e, "seeding aborted");
            ExitCode::FAILURE
        }
    }
}
