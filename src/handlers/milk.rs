//! Milk ledger HTTP handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::farm::{MilkTradeRequest, MilkTransaction, TradeKind};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// GET /milk - List milk transactions
pub async fn list_milk_transactions(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<MilkTransaction>>, ApiError> {
    let transactions = state.farm_service.list_milk_transactions().await?;
    Ok(Json(transactions))
}

/// POST /milk/sale - Record a milk sale
pub async fn create_milk_sale(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(req): Json<MilkTradeRequest>,
) -> Result<(StatusCode, Json<MilkTransaction>), ApiError> {
    req.validate()?;

    let transaction = state
        .farm_service
        .create_milk_transaction(TradeKind::Sale, req)
        .await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// POST /milk/purchase - Record a milk purchase
pub async fn create_milk_purchase(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(req): Json<MilkTradeRequest>,
) -> Result<(StatusCode, Json<MilkTransaction>), ApiError> {
    req.validate()?;

    let transaction = state
        .farm_service
        .create_milk_transaction(TradeKind::Purchase, req)
        .await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}
