//! HTTP surface of the pet-care marketplace: axum routers, JWT middleware,
//! validated extractors and the OpenAPI document.

pub mod errors;
pub mod extract;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::{build_app, build_state, run, serve};
pub use state::AppState;
