/**
 * Token Issuance and Verification
 *
 * Signed, time-limited credentials proving identity without re-sending
 * the password on every request. Tokens are HS256-signed with the
 * process-wide secret and expire 24 hours after issuance. Rotating the
 * secret invalidates all outstanding tokens; that is accepted, not
 * handled specially.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Token lifetime: 24 hours.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Claims carried by every issued token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: i64,
    /// Username at issuance time
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration (Unix timestamp)
    pub exp: u64,
}

/// Signing and verification keys, built once from the configured secret
/// at startup and shared read-only through the application state.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// Issue a token for a user with the standard 24-hour lifetime.
pub fn create_token(
    keys: &JwtKeys,
    user_id: i64,
    username: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    create_token_with_ttl(keys, user_id, username, TOKEN_TTL_SECS)
}

/// Issue a token with an explicit lifetime in seconds.
///
/// A non-positive TTL produces an already-expired token; tests use that
/// to exercise expiry rejection without waiting.
pub fn create_token_with_ttl(
    keys: &JwtKeys,
    user_id: i64,
    username: &str,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        iat: now.max(0) as u64,
        exp: (now + ttl_secs).max(0) as u64,
    };

    encode(&Header::default(), &claims, &keys.encoding)
}

/// Verify a token's signature and expiry, returning the decoded claims.
///
/// Any failure (bad signature, malformed token, expired) is an error; no
/// partial trust is granted.
pub fn verify_token(
    keys: &JwtKeys,
    token: &str,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(token, &keys.decoding, &Validation::default())?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::from_secret(b"unit-test-secret")
    }

    #[test]
    fn test_create_and_verify_token() {
        let keys = keys();
        let token = create_token(&keys, 42, "alice").unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&keys, &token).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECS as u64);
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(verify_token(&keys(), "invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = create_token(&keys(), 1, "alice").unwrap();
        let other = JwtKeys::from_secret(b"a-different-secret");
        assert!(verify_token(&other, &token).is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let keys = keys();
        // Well past the default validation leeway.
        let token = create_token_with_ttl(&keys, 1, "alice", -3600).unwrap();
        assert!(verify_token(&keys, &token).is_err());
    }
}
