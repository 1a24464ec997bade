//! Animal ledger routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::animals;
use crate::state::AppState;

/// Create animal routes
pub fn animal_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/animals",
            get(animals::list_animals).post(animals::create_animal),
        )
        .route("/animals/transactions", get(animals::list_animal_transactions))
        .route("/animals/:id/sale", post(animals::sell_animal))
        .route("/animals/:id/purchase", post(animals::purchase_animal))
}
