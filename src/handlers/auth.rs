//! Authentication HTTP handlers
//!
//! Signup and login. Request bodies are validated before any storage or
//! crypto work happens; every failure is converted to a status + JSON body
//! at this boundary.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, UserResponse};
use crate::state::AppState;

/// POST /auth/signup - Create a user account
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()?;

    let created = state.auth_service.signup(req).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /auth/login - Verify credentials and issue a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    req.validate()?;

    let response = state
        .auth_service
        .login(&req.email_or_mobile, &req.password)
        .await?;

    Ok(Json(response))
}
