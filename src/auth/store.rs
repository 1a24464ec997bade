//! Credential store
//!
//! Owns user identity records and uniqueness enforcement. The storage
//! backend sits behind [`UserStore`] so the store can be exercised with an
//! in-memory fake; the production backend is [`PgUserStore`].
//!
//! The email-then-mobile uniqueness check runs before every insert and
//! names the colliding field. It is advisory (check-then-act): two
//! concurrent signups can both pass it, which is why the `users` table also
//! carries unique indexes. A constraint violation surfacing from the insert
//! itself maps to the same `Duplicate` error.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{NewUser, User};

/// Identity field that collided during a uniqueness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityField {
    Email,
    Mobile,
}

impl IdentityField {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityField::Email => "Email",
            IdentityField::Mobile => "Mobile",
        }
    }
}

/// Credential store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{} already in use", .0.as_str())]
    Duplicate(IdentityField),

    #[error("Failed to retrieve created user")]
    Persistence,

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

/// Storage contract for user records.
///
/// Inputs are already normalized by [`CredentialStore`]; implementations
/// compare exactly.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError>;
    async fn insert(&self, user: User) -> Result<User, StoreError>;
}

/// Credential store: normalization, uniqueness protocol, record stamping.
#[derive(Clone)]
pub struct CredentialStore {
    store: Arc<dyn UserStore>,
}

impl CredentialStore {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// Look up a user by email. Input is trimmed and lowercased; empty
    /// input short-circuits to not-found.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let needle = email.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }
        self.store.find_by_email(&needle).await
    }

    /// Look up a user by mobile number. Input is trimmed; empty input
    /// short-circuits to not-found.
    pub async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError> {
        let needle = mobile.trim();
        if needle.is_empty() {
            return Ok(None);
        }
        self.store.find_by_mobile(needle).await
    }

    /// Fail with `Duplicate` if either identity is already taken. Email is
    /// checked first, then mobile. Read-only.
    pub async fn assert_unique(&self, email: Option<&str>, mobile: &str) -> Result<(), StoreError> {
        if let Some(email) = email {
            if self.find_by_email(email).await?.is_some() {
                return Err(StoreError::Duplicate(IdentityField::Email));
            }
        }

        if self.find_by_mobile(mobile).await?.is_some() {
            return Err(StoreError::Duplicate(IdentityField::Mobile));
        }

        Ok(())
    }

    /// Create a user record: uniqueness check, then stamp identifier and
    /// timestamps, then insert.
    ///
    /// Returns the stored record with the password hash still present; the
    /// signup handler strips it before the response boundary.
    pub async fn create(&self, new_user: NewUser) -> Result<User, StoreError> {
        self.assert_unique(new_user.email.as_deref(), &new_user.mobile)
            .await?;

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new_user.name,
            email: new_user.email,
            mobile: new_user.mobile,
            gender: new_user.gender,
            address: new_user.address,
            role: new_user.role,
            password_hash: new_user.password_hash,
            otp_verified: new_user.otp.as_ref().map(|_| false),
            otp: new_user.otp,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(user).await
    }
}

const USER_COLUMNS: &str = "id, name, email, mobile, gender, address, role, password_hash, \
     otp, otp_verified, is_active, created_at, updated_at";

/// PostgreSQL-backed user store
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE mobile = $1",
            USER_COLUMNS
        ))
        .bind(mobile)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users ({})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {}",
            USER_COLUMNS, USER_COLUMNS
        ))
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.mobile)
        .bind(user.gender)
        .bind(&user.address)
        .bind(user.role)
        .bind(&user.password_hash)
        .bind(&user.otp)
        .bind(user.otp_verified)
        .bind(user.is_active)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_insert_error)?
        .ok_or(StoreError::Persistence)
    }
}

/// Unique-index violations become `Duplicate` so a lost check-then-act race
/// still surfaces as the right error.
fn map_insert_error(e: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &e {
        if db.code().as_deref() == Some("23505") {
            return if db.constraint() == Some("users_mobile_key") {
                StoreError::Duplicate(IdentityField::Mobile)
            } else {
                StoreError::Duplicate(IdentityField::Email)
            };
        }
    }
    StoreError::Database(e.to_string())
}

/// In-memory user store implementing the same contract as [`PgUserStore`],
/// including uniqueness enforcement at insert time. Used by tests.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn count(&self) -> usize {
        self.users.lock().len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock();
        Ok(users
            .iter()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock();
        Ok(users.iter().find(|u| u.mobile == mobile).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, StoreError> {
        let mut users = self.users.lock();

        if user.email.is_some() && users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Duplicate(IdentityField::Email));
        }
        if users.iter().any(|u| u.mobile == user.mobile) {
            return Err(StoreError::Duplicate(IdentityField::Mobile));
        }

        users.push(user.clone());
        Ok(user)
    }
}
