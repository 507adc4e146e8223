/**
 * Session Tokens
 *
 * Sessions are not stored server-side. A session is a signed JWT carrying
 * the user id, issued at login and presented in the `token` cookie on
 * every authenticated request. Tokens expire after seven days.
 *
 * Verification failures are deliberately collapsed into a single
 * `AuthFailure` so callers cannot tell a forged token from an expired one.
 */

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::shared::UserId;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

/// How long an issued session stays valid
pub const SESSION_DAYS: i64 = 7;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Uniform verification failure; the reason is only logged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthFailure;

/// Issues and verifies session tokens with a shared HMAC secret
#[derive(Clone)]
pub struct SessionCodec {
    keys: Arc<Keys>,
    validity: Duration,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SessionCodec {
    pub fn new(secret: &str) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
            validity: Duration::days(SESSION_DAYS),
        }
    }

    /// Validity window of issued tokens
    pub fn validity(&self) -> Duration {
        self.validity
    }

    /// Create a token for a user, valid from now
    pub fn issue(&self, user_id: UserId) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(user_id, Utc::now())
    }

    /// Create a token as if issued at `issued_at`
    pub fn issue_at(
        &self,
        user_id: UserId,
        issued_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.validity).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
    }

    /// Verify signature and expiry, then resolve the token to a user id
    pub fn authenticate(&self, token: &str) -> Result<UserId, AuthFailure> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.keys.decoding, &validation)
            .map_err(|e| {
                tracing::debug!("Session token rejected: {:?}", e.kind());
                AuthFailure
            })?
            .claims;

        claims.sub.parse::<UserId>().map_err(|_| {
            tracing::debug!("Session token subject is not a user id");
            AuthFailure
        })
    }
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("validity", &self.validity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_and_authenticate() {
        let codec = SessionCodec::new("test-secret");
        let token = codec.issue(42).unwrap();
        assert!(!token.is_empty());
        assert_eq!(codec.authenticate(&token), Ok(42));
    }

    #[test]
    fn test_token_expires_after_seven_days() {
        let codec = SessionCodec::new("test-secret");
        let issued = Utc::now() - Duration::days(SESSION_DAYS) - Duration::minutes(1);
        let token = codec.issue_at(42, issued).unwrap();
        assert_eq!(codec.authenticate(&token), Err(AuthFailure));

        let recent = Utc::now() - Duration::days(SESSION_DAYS) + Duration::minutes(5);
        let token = codec.issue_at(42, recent).unwrap();
        assert_eq!(codec.authenticate(&token), Ok(42));
    }

    #[test]
    fn test_rejects_foreign_signature() {
        let token = SessionCodec::new("one-secret").issue(7).unwrap();
        assert_eq!(SessionCodec::new("other-secret").authenticate(&token), Err(AuthFailure));
    }

    #[test]
    fn test_rejects_garbage() {
        let codec = SessionCodec::new("test-secret");
        for token in ["", "invalid.token.here", "a.b", "not-a-jwt"] {
            assert_eq!(codec.authenticate(token), Err(AuthFailure), "token {token:?}");
        }
    }

    #[test]
    fn test_rejects_tampered_payload() {
        let codec = SessionCodec::new("test-secret");
        let token = codec.issue(1).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = codec.issue(2).unwrap();
        let forged_payload = forged.split('.').nth(1).unwrap().to_string();
        parts[1] = &forged_payload;
        let tampered = parts.join(".");
        assert_eq!(codec.authenticate(&tampered), Err(AuthFailure));
    }
}
