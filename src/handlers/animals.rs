//! Animal ledger HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::ApiError;
use crate::farm::{Animal, AnimalTradeRequest, AnimalTransaction, NewAnimalRequest, TradeKind};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// GET /animals - List the herd
pub async fn list_animals(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<Animal>>, ApiError> {
    let animals = state.farm_service.list_animals().await?;
    Ok(Json(animals))
}

/// POST /animals - Register an animal
pub async fn create_animal(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Json(req): Json<NewAnimalRequest>,
) -> Result<(StatusCode, Json<Animal>), ApiError> {
    req.validate()?;

    let animal = state.farm_service.create_animal(req).await?;
    Ok((StatusCode::CREATED, Json(animal)))
}

/// GET /animals/transactions - List all animal trades
pub async fn list_animal_transactions(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<AnimalTransaction>>, ApiError> {
    let transactions = state.farm_service.list_animal_transactions().await?;
    Ok(Json(transactions))
}

/// POST /animals/:id/sale - Record the sale of an animal
pub async fn sell_animal(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AnimalTradeRequest>,
) -> Result<(StatusCode, Json<AnimalTransaction>), ApiError> {
    record_trade(&state, id, TradeKind::Sale, req).await
}

/// POST /animals/:id/purchase - Record the purchase of an animal
pub async fn purchase_animal(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(req): Json<AnimalTradeRequest>,
) -> Result<(StatusCode, Json<AnimalTransaction>), ApiError> {
    record_trade(&state, id, TradeKind::Purchase, req).await
}

async fn record_trade(
    state: &AppState,
    id: Uuid,
    kind: TradeKind,
    req: AnimalTradeRequest,
) -> Result<(StatusCode, Json<AnimalTransaction>), ApiError> {
    req.validate()?;

    let transaction = state
        .farm_service
        .record_animal_trade(id, kind, req)
        .await?
        .ok_or_else(|| ApiError::NotFound("Animal not found".to_string()))?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
