//! Data models for the FarmBook backend

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod auth;
pub use auth::*;

/// User account record.
///
/// `password_hash` never crosses the API boundary; handlers convert to
/// [`UserResponse`] before serializing.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub role: UserRole,
    pub password_hash: String,
    pub otp: Option<String>,
    pub otp_verified: Option<bool>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the signup flow when creating a user. Identifier and
/// timestamps are stamped by the credential store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
    pub mobile: String,
    pub gender: Option<Gender>,
    pub address: Option<String>,
    pub role: UserRole,
    pub password_hash: String,
    pub otp: Option<String>,
}

/// User roles, wire-encoded as integers for client compatibility:
/// 0 = super admin, 1 = admin, 2 = consumer.
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(into = "u8", try_from = "u8")]
#[repr(i16)]
pub enum UserRole {
    SuperAdmin = 0,
    Admin = 1,
    Consumer = 2,
}

impl From<UserRole> for u8 {
    fn from(role: UserRole) -> Self {
        role as u8
    }
}

impl TryFrom<u8> for UserRole {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(UserRole::SuperAdmin),
            1 => Ok(UserRole::Admin),
            2 => Ok(UserRole::Consumer),
            other => Err(format!("invalid role: {}", other)),
        }
    }
}

/// Gender
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "gender", rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// User response (sanitized for API): no password hash, no OTP fields.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub mobile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            mobile: user.mobile,
            gender: user.gender,
            address: user.address,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
