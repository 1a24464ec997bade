//! JWT token generation and validation
//!
//! Tokens are stateless bearer credentials: there is no server-side session
//! or revocation list, and logout is a client-side discard. A token is valid
//! exactly while its signature checks out and its expiry is in the future.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{User, UserRole};

/// JWT-related errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token verification failed: {0}")]
    VerificationFailed(String),
}

/// Claims embedded in a bearer token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: Option<String>,
    pub mobile: String,
    pub name: String,
    /// Role, integer-encoded (0/1/2)
    pub role: UserRole,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Issue a signed bearer token for a user.
///
/// Expiry is `now + ttl_seconds`; construction is pure and never touches
/// storage.
pub fn issue_token(user: &User, secret: &str, ttl_seconds: i64) -> Result<String, JwtError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(ttl_seconds);

    let claims = Claims {
        sub: user.id.to_string(),
        email: user.email.clone(),
        mobile: user.mobile.clone(),
        name: user.name.clone(),
        role: user.role,
        iat: now.timestamp(),
        exp: exp.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| JwtError::EncodingFailed(e.to_string()))
}

/// Verify and decode a bearer token.
///
/// # Returns
/// * `Ok(Claims)` if the signature matches and the token has not expired
/// * `Err(JwtError::TokenExpired)` past the embedded expiry
/// * `Err(JwtError::InvalidToken)` for a bad signature or malformed payload
/// * `Err(JwtError::VerificationFailed)` for any other decode error
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => JwtError::TokenExpired,
        ErrorKind::InvalidToken
        | ErrorKind::InvalidSignature
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => JwtError::InvalidToken,
        _ => JwtError::VerificationFailed(e.to_string()),
    })
}

/// Extract the token from an `Authorization` header value.
///
/// Returns the token substring when the value starts with the literal,
/// case-sensitive prefix `Bearer ` (single space); absence of a token is
/// not an error.
pub fn extract_bearer(header: Option<&str>) -> Option<&str> {
    header?.strip_prefix("Bearer ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn create_test_user() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Asha".to_string(),
            email: Some("asha@example.com".to_string()),
            mobile: "9876543210".to_string(),
            gender: None,
            address: None,
            role: UserRole::Consumer,
            password_hash: "salt:digest".to_string(),
            otp: None,
            otp_verified: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let user = create_test_user();
        let secret = "test-secret-key";

        let token = issue_token(&user, secret, 900).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, secret).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.mobile, user.mobile);
        assert_eq!(claims.name, user.name);
        assert_eq!(claims.role, UserRole::Consumer);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token() {
        let user = create_test_user();
        let secret = "test-secret-key";

        // Past the default 60s validation leeway
        let token = issue_token(&user, secret, -120).unwrap();
        let result = verify_token(&token, secret);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_wrong_secret_is_invalid_not_expired() {
        let user = create_test_user();
        let token = issue_token(&user, "secret1", 900).unwrap();

        let result = verify_token(&token, "secret2");
        assert!(matches!(result, Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_garbage_token() {
        let result = verify_token("not.a.token", "test-secret-key");
        assert!(matches!(result, Err(JwtError::InvalidToken)));
    }

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer(Some("Bearer abc123")), Some("abc123"));
        assert_eq!(extract_bearer(Some("abc123")), None);
        assert_eq!(extract_bearer(Some("bearer abc123")), None);
        assert_eq!(extract_bearer(Some("Bearer")), None);
        assert_eq!(extract_bearer(Some("")), None);
        assert_eq!(extract_bearer(None), None);
    }
}
