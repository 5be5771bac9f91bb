//! Credential primitives: password hashing and JWT issuing/verification.
//!
//! Both are framework independent; the HTTP layer only sees `Claims`.

pub mod password;
pub mod token;

pub use password::{Argon2Hasher, PasswordHasher};
pub use token::{Claims, TokenIssuer};
