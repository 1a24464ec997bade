//! Fodder ledger routes

use axum::{routing::get, Router};

use crate::handlers::fodder;
use crate::state::AppState;

/// Create fodder routes
pub fn fodder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/fodder/purchases",
            get(fodder::list_fodder_purchases).post(fodder::create_fodder_purchase),
        )
        .route(
            "/fodder/consumptions",
            get(fodder::list_fodder_consumptions).post(fodder::create_fodder_consumption),
        )
}
