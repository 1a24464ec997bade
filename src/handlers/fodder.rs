//! Fodder ledger HTTP handlers

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::error::ApiError;
use crate::farm::{
    FodderConsumption, FodderConsumptionRequest, FodderPurchase, FodderPurchaseRequest,
};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// GET /fodder/purchases - List fodder purchases
pub async fn list_fodder_purchases(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<FodderPurchase>>, ApiError> {
    let purchases = state.farm_service.list_fodder_purchases().await?;
    Ok(Json(purchases))
}

/// POST /fodder/purchases - Record a fodder purchase
pub async fn create_fodder_purchase(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(req): Json<FodderPurchaseRequest>,
) -> Result<(StatusCode, Json<FodderPurchase>), ApiError> {
    req.validate()?;

    let purchase = state.farm_service.create_fodder_purchase(req).await?;
    Ok((StatusCode::CREATED, Json(purchase)))
}

/// GET /fodder/consumptions - List daily consumption entries
pub async fn list_fodder_consumptions(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<FodderConsumption>>, ApiError> {
    let consumptions = state.farm_service.list_fodder_consumptions().await?;
    Ok(Json(consumptions))
}

/// POST /fodder/consumptions - Record a daily consumption entry
pub async fn create_fodder_consumption(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(req): Json<FodderConsumptionRequest>,
) -> Result<(StatusCode, Json<FodderConsumption>), ApiError> {
    req.validate()?;

    let consumption = state.farm_service.create_fodder_consumption(req).await?;
    Ok((StatusCode::CREATED, Json(consumption)))
}
