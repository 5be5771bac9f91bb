//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Maps ORM failures onto `ServiceError` and enforces ownership rules.
//! - Returns the wire types shared with the API client.

pub mod auth;
pub mod errors;
pub mod pagination;
pub mod reconcile;
pub mod services;
#[cfg(test)]
pub mod test_support;
pub mod users;

pub use errors::{ServiceError, ServiceResult};
