//! Authentication middleware
//!
//! Every route outside signup/login extracts [`AuthenticatedUser`], which
//! gates the request: no token, expired token, and invalid token each
//! reject with a specific 401 body before the handler runs.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{extract_bearer, verify_token, AuthService, JwtError};
use crate::models::UserRole;

/// Identity decoded from a verified bearer token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub mobile: String,
    pub name: String,
    pub role: UserRole,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let token = extract_bearer(header_value)
            .ok_or_else(|| unauthorized("Unauthorized - No token provided"))?;

        let auth_service = Arc::<AuthService>::from_ref(state);

        let claims = verify_token(token, auth_service.jwt_secret()).map_err(|e| match e {
            JwtError::TokenExpired => unauthorized("Token expired"),
            JwtError::InvalidToken => unauthorized("Invalid token"),
            _ => unauthorized("Unauthorized"),
        })?;

        let user_id =
            Uuid::parse_str(&claims.sub).map_err(|_| unauthorized("Invalid token"))?;

        Ok(AuthenticatedUser {
            user_id,
            email: claims.email,
            mobile: claims.mobile,
            name: claims.name,
            role: claims.role,
        })
    }
}
