//! Shared building blocks for the pet-care marketplace crates.
//!
//! - `types`: wire DTOs exchanged between the server and the API client.
//! - `utils::logging`: tracing subscriber setup used by every binary.

pub mod types;
pub mod utils;

pub use types::{ErrorBody, FieldError, Health, Page};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }
}
