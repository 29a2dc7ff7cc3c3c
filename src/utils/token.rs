use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::error::AppError;

pub const DEFAULT_TTL_DAYS: i64 = 1;

const SECONDS_PER_DAY: i64 = 86_400;

/// Claims carried by every access token. `jti` is what the block list
/// stores when a token is revoked.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

pub fn issue_token(secret: &str, user_id: Uuid, expire_days: i64) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        exp: now + expire_days * SECONDS_PER_DAY,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("failed to sign token: {e}")))
}

pub fn issue_token_default(secret: &str, user_id: Uuid) -> Result<String, AppError> {
    issue_token(secret, user_id, DEFAULT_TTL_DAYS)
}

/// Checks signature and expiry. Revocation is a separate lookup against the
/// block list, see `DbService::token_is_revoked`.
pub fn decode_token(secret: &str, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn issue_then_decode() {
        let uid = Uuid::new_v4();
        let token = issue_token(SECRET, uid, 3).unwrap();
        let claims = decode_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, uid);
        assert_eq!(claims.exp - claims.iat, 3 * SECONDS_PER_DAY);
        assert_eq!(claims.jti.len(), 36);
    }

    #[test]
    fn default_ttl_is_one_day() {
        let token = issue_token_default(SECRET, Uuid::new_v4()).unwrap();
        let claims = decode_token(SECRET, &token).unwrap();
        assert_eq!(claims.exp - claims.iat, SECONDS_PER_DAY);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(SECRET, Uuid::new_v4(), 1).unwrap();
        assert!(matches!(
            decode_token("other-secret", &token),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn fresh_tokens_get_distinct_jti() {
        let uid = Uuid::new_v4();
        let a = decode_token(SECRET, &issue_token(SECRET, uid, 1).unwrap()).unwrap();
        let b = decode_token(SECRET, &issue_token(SECRET, uid, 1).unwrap()).unwrap();
        assert_ne!(a.jti, b.jti);
    }
}
