//! Milk ledger routes

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::milk;
use crate::state::AppState;

/// Create milk routes
pub fn milk_routes() -> Router<AppState> {
    Router::new()
        .route("/milk", get(milk::list_milk_transactions))
        .route("/milk/sale", post(milk::create_milk_sale))
        .route("/milk/purchase", post(milk::create_milk_purchase))
}
