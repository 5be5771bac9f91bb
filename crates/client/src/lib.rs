//! Typed HTTP client for the pet-care marketplace API plus a mock-data
//! seeder built on top of it.

pub mod client;
mod endpoints;
pub mod error;
pub mod seed;

pub use client::ApiClient;
pub use error::ClientError;
