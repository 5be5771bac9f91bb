//! Wire types shared by the HTTP server and the API client.
//!
//! Field names are camelCase on the wire; enums travel as SCREAMING_SNAKE_CASE
//! strings. Request DTOs carry their `validator` rules so the server can run
//! them before any handler logic.

use serde::{Deserialize, Serialize};

pub mod appointment;
pub mod enums;
pub mod location;
pub mod offering;
pub mod pet;
pub mod product;
pub mod review;
pub mod store;
pub mod user;
pub mod vet;

pub use enums::{AppointmentStatus, Gender, ProductCategory, Species, StoreType};

/// Number of rows in one page of a paginated listing.
pub const PAGE_SIZE: u64 = 15;

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// One failed field rule.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }

    /// Flatten `validator` output into a list ordered by field name.
    pub fn from_validation(errors: &validator::ValidationErrors) -> Vec<FieldError> {
        let mut out: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid ({})", field, e.code));
                    FieldError { field: field.clone(), message }
                })
            })
            .collect();
        out.sort_by(|a, b| a.field.cmp(&b.field));
        out
    }
}

/// Error payload returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<FieldError>>,
}

/// One page of a listing plus a flag telling whether a next page exists.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", aliases(StorePage = Page<store::Store>, ProductPage = Page<product::Product>))]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub has_more: bool,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page { items: self.items.into_iter().map(f).collect(), page: self.page, has_more: self.has_more }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn error_body_omits_empty_validation_errors() {
        let body = ErrorBody { error: "nope".into(), validation_errors: None };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "nope"}));
    }

    #[test]
    fn error_body_uses_camel_case() {
        let body = ErrorBody {
            error: "validation failed".into(),
            validation_errors: Some(vec![FieldError::new("rating", "bad")]),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["validationErrors"][0]["field"], "rating");
    }

    #[test]
    fn field_errors_are_sorted_and_carry_messages() {
        let req = review::CreateReviewRequest {
            rating: 9,
            content: String::new(),
            product_id: None,
            service_provider_id: None,
            store_id: None,
        };
        let errs = req.validate().unwrap_err();
        let flat = FieldError::from_validation(&errs);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].field, "content");
        assert_eq!(flat[1].field, "rating");
        assert_eq!(flat[1].message, "rating must be between 0 and 5");
    }
}
