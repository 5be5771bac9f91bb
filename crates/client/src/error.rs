use common::types::{ErrorBody, FieldError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String, validation_errors: Vec<FieldError> },
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("invalid base url: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Build from a failed response body; falls back to the raw text when it
    /// is not an `{ error }` document.
    pub fn from_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => ClientError::Api {
                status,
                message: parsed.error,
                validation_errors: parsed.validation_errors.unwrap_or_default(),
            },
            Err(_) => ClientError::Api {
                status,
                message: if body.trim().is_empty() { format!("request failed with status {status}") } else { body.to_string() },
                validation_errors: Vec::new(),
            },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}
