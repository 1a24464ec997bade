//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::AuthService;
use crate::db::Database;
use crate::farm::FarmService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub farm_service: Arc<FarmService>,
    pub db: Database,
}

impl AppState {
    pub fn new(
        auth_service: Arc<AuthService>,
        farm_service: Arc<FarmService>,
        db: Database,
    ) -> Self {
        Self {
            auth_service,
            farm_service,
            db,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}

impl FromRef<AppState> for Arc<FarmService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.farm_service.clone()
    }
}
