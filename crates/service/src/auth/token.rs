use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;

/// JWT payload attached to authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signer/verifier over a shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ttl_hours.max(1)),
        }
    }

    pub fn from_config(cfg: &configs::AuthConfig) -> Self { Self::new(&cfg.jwt_secret, cfg.token_ttl_hours) }

    pub fn issue(&self, user_id: Uuid) -> Result<String, ServiceError> {
        let now = Utc::now();
        let claims = Claims { user_id, iat: now.timestamp(), exp: (now + self.ttl).timestamp() };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ServiceError::Internal(format!("token signing failed: {e}")))
    }

    /// Decode and check signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, ServiceError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ServiceError::Unauthorized("invalid or expired token".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_round_trips() {
        let issuer = TokenIssuer::new("unit-test-secret", 12);
        let uid = Uuid::new_v4();
        let token = issuer.issue(uid).unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.user_id, uid);
        assert_eq!(claims.exp - claims.iat, 12 * 3600);
    }

    #[test]
    fn foreign_secret_is_rejected() {
        let token = TokenIssuer::new("one", 1).issue(Uuid::new_v4()).unwrap();
        assert!(matches!(TokenIssuer::new("two", 1).verify(&token), Err(ServiceError::Unauthorized(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let issuer = TokenIssuer::new("secret", 1);
        let past = Utc::now() - Duration::hours(3);
        let claims = Claims { user_id: Uuid::new_v4(), iat: past.timestamp(), exp: (past + Duration::hours(1)).timestamp() };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"secret")).unwrap();
        assert!(issuer.verify(&token).is_err());
    }

    #[test]
    fn claims_use_camel_case() {
        let c = Claims { user_id: Uuid::nil(), iat: 1, exp: 2 };
        let v = serde_json::to_value(&c).unwrap();
        assert!(v.get("userId").is_some());
    }
}
