use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;

use crate::errors::ServiceError;

/// One-way password hashing, swappable so tests can use a stub.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, ServiceError>;
    fn verify(&self, plain: &str, hashed: &str) -> Result<bool, ServiceError>;
}

/// Argon2id with a random per-password salt, stored as a PHC string.
#[derive(Clone, Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, plain: &str) -> Result<String, ServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| ServiceError::Internal(format!("password hashing failed: {e}")))
    }

    fn verify(&self, plain: &str, hashed: &str) -> Result<bool, ServiceError> {
        let parsed = PasswordHash::new(hashed)
            .map_err(|e| ServiceError::Internal(format!("stored hash is malformed: {e}")))?;
        Ok(Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
    }
}
