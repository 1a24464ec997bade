//! Authentication service
//!
//! Core business logic for signup and login. Lookup misses and hash
//! mismatches both surface as `InvalidCredentials` so callers cannot probe
//! which identities exist.

use thiserror::Error;

use crate::models::{LoginResponse, NewUser, SignupRequest, UserResponse, UserRole};

use super::jwt::{issue_token, JwtError};
use super::password::{hash_password, verify_password, PasswordError};
use super::store::{CredentialStore, StoreError};

/// Auth service errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Stored password hash is corrupt")]
    CorruptCredential,

    #[error(transparent)]
    Token(#[from] JwtError),

    #[error("{0}")]
    Hashing(String),
}

impl From<PasswordError> for AuthError {
    fn from(e: PasswordError) -> Self {
        match e {
            PasswordError::CorruptHash => AuthError::CorruptCredential,
            PasswordError::Derivation(msg) => AuthError::Hashing(msg),
        }
    }
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    store: CredentialStore,
    jwt_secret: String,
    token_ttl_seconds: i64,
}

impl AuthService {
    /// Create a new AuthService. The secret and TTL come from validated
    /// startup configuration; they are never re-checked per request.
    pub fn new(store: CredentialStore, jwt_secret: String, token_ttl_seconds: i64) -> Self {
        Self {
            store,
            jwt_secret,
            token_ttl_seconds,
        }
    }

    /// Register a new user.
    ///
    /// Hashes the password, normalizes identity fields, and creates the
    /// record. The returned response never carries the password hash.
    pub async fn signup(&self, req: SignupRequest) -> Result<UserResponse, AuthError> {
        let password_hash = hash_password(&req.password)?;

        let email = req
            .email
            .map(|e| e.trim().to_lowercase())
            .filter(|e| !e.is_empty());

        let new_user = NewUser {
            name: req.name.trim().to_string(),
            email,
            mobile: req.mobile.trim().to_string(),
            gender: req.gender,
            address: req
                .address
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty()),
            role: req.role.unwrap_or(UserRole::Consumer),
            password_hash,
            otp: req.otp.map(|o| o.trim().to_string()),
        };

        let created = self.store.create(new_user).await?;

        tracing::info!(user_id = %created.id, mobile = %created.mobile, "New user created");

        Ok(created.into())
    }

    /// Authenticate by email or mobile number and issue a bearer token.
    pub async fn login(
        &self,
        email_or_mobile: &str,
        password: &str,
    ) -> Result<LoginResponse, AuthError> {
        let user = match self.store.find_by_email(email_or_mobile).await? {
            Some(user) => Some(user),
            None => self.store.find_by_mobile(email_or_mobile).await?,
        };

        let user = user.ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = issue_token(&user, &self.jwt_secret, self.token_ttl_seconds)?;

        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }

    /// Get JWT secret (for middleware access)
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
}
