//! Route definitions for the FarmBook API

mod animals;
mod auth;
mod fodder;
mod milk;

pub use animals::animal_routes;
pub use auth::auth_routes;
pub use fodder::fodder_routes;
pub use milk::milk_routes;

use axum::{extract::State, routing::get, Json, Router};

use crate::state::AppState;

/// Build the full application router. State and middleware layers are
/// attached by the caller.
pub fn app_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(auth_routes())
        .merge(animal_routes())
        .merge(milk_routes())
        .merge(fodder_routes())
}

async fn root() -> &'static str {
    "FarmBook API Server"
}

/// Health check response
#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
    database: String,
    version: String,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = if state.db.is_healthy().await {
        "connected".to_string()
    } else {
        "error".to_string()
    };

    let status = if database == "connected" {
        "healthy"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: status.to_string(),
        database,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
