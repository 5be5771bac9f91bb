use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Registration payload for `POST /api/users/create`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 32, message = "username must be 3-32 characters"))]
    pub username: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 64, message = "firstName is required"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64, message = "lastName is required"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(min = 5, max = 32, message = "phone must be 5-32 characters"))]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(url(message = "avatarUrl must be a URL"))]
    pub avatar_url: Option<String>,
}

/// Partial profile update; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 32, message = "username must be 3-32 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 128, message = "password must be at least 8 characters"))]
    pub password: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 64))]
    pub last_name: Option<String>,
    #[validate(length(min = 5, max = 32, message = "phone must be 5-32 characters"))]
    pub phone: Option<String>,
    #[validate(url(message = "avatarUrl must be a URL"))]
    pub avatar_url: Option<String>,
}

/// Credentials for `POST /api/users/login`: username or email plus password.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "login_identifier_present"))]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

impl LoginRequest {
    /// The identifier to look up, preferring the username. Blank fields
    /// count as absent.
    pub fn identifier(&self) -> Option<&str> {
        non_blank(&self.username).or_else(|| non_blank(&self.email))
    }
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn login_identifier_present(req: &LoginRequest) -> Result<(), ValidationError> {
    if req.identifier().is_some() {
        return Ok(());
    }
    let mut err = ValidationError::new("identifier");
    err.message = Some("username or email is required".into());
    Err(err)
}

/// User as exposed over the API. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// Returned by registration and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateUserRequest {
        CreateUserRequest {
            username: "testuser".into(),
            email: "test@example.com".into(),
            password: "password123".into(),
            first_name: "Test".into(),
            last_name: "User".into(),
            phone: None,
            avatar_url: None,
        }
    }

    #[test]
    fn create_request_rules() {
        assert!(valid().validate().is_ok());

        let mut req = valid();
        req.email = "not-an-email".into();
        assert!(req.validate().is_err());

        let mut req = valid();
        req.password = "short".into();
        let errs = req.validate().unwrap_err();
        assert!(errs.field_errors().contains_key("password"));
    }

    #[test]
    fn login_requires_username_or_email() {
        let req = LoginRequest { password: "password123".into(), ..Default::default() };
        assert!(req.validate().is_err());

        let req = LoginRequest { email: Some("a@b.com".into()), password: "x".into(), ..Default::default() };
        assert!(req.validate().is_ok());
        assert_eq!(req.identifier(), Some("a@b.com"));
    }

    #[test]
    fn blank_username_falls_back_to_email() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"  ","email":"a@b.com","password":"pw"}"#).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.identifier(), Some("a@b.com"));
    }

    #[test]
    fn login_deserializes_camel_case() {
        let req: LoginRequest = serde_json::from_str(r#"{"username":"bob","password":"pw"}"#).unwrap();
        assert_eq!(req.identifier(), Some("bob"));
    }
}
