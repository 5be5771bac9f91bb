use common::types::FieldError;
use sea_orm::DbErr;
use thiserror::Error;

const DB_FALLBACK: &str = "database operation failed";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn forbidden(action: &str) -> Self { Self::Forbidden(format!("not allowed to {}", action)) }

    pub fn bad_request(msg: impl Into<String>) -> Self { Self::BadRequest(msg.into()) }
}

/// ORM failures surface as bad requests carrying the driver message, except
/// a write that found no row, which stays NotFound.
impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        match &e {
            DbErr::RecordNotFound(what) if !what.is_empty() => return ServiceError::not_found(what),
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => return ServiceError::not_found("record"),
            _ => {}
        }
        let msg = e.to_string();
        if msg.trim().is_empty() {
            ServiceError::BadRequest(DB_FALLBACK.to_string())
        } else {
            ServiceError::BadRequest(msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_errors_keep_their_message() {
        let err: ServiceError = DbErr::Custom("UNIQUE constraint failed: user.email".into()).into();
        match err {
            ServiceError::BadRequest(m) => assert!(m.contains("UNIQUE constraint failed")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_db_message_falls_back() {
        let err: ServiceError = DbErr::Custom(String::new()).into();
        // DbErr::Custom prefixes its own label, so only the variant is checked here
        assert!(matches!(err, ServiceError::BadRequest(_)));
    }

    #[test]
    fn missing_record_stays_not_found() {
        let err: ServiceError = DbErr::RecordNotFound("user 42".into()).into();
        assert_eq!(err.to_string(), "user 42 not found");
        assert!(matches!(ServiceError::from(DbErr::RecordNotUpdated), ServiceError::NotFound(_)));
    }

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(ServiceError::not_found("pet").to_string(), "pet not found");
    }
}
