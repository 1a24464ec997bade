//! Authentication module for FarmBook
//!
//! Credential and session handling:
//! - salted scrypt password hashing
//! - JWT bearer token issuance and verification
//! - user store with identity-uniqueness enforcement

pub mod jwt;
pub mod password;
pub mod service;
pub mod store;

pub use jwt::{extract_bearer, issue_token, verify_token, Claims, JwtError};
pub use service::{AuthError, AuthService};
pub use store::{CredentialStore, MemoryUserStore, PgUserStore, UserStore};
