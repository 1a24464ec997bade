//! Farm ledger models

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

/// Animal lifecycle status
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "animal_status", rename_all = "lowercase")]
pub enum AnimalStatus {
    Active,
    Sold,
    Deceased,
}

/// Direction of a ledger trade
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "trade_kind", rename_all = "lowercase")]
pub enum TradeKind {
    Sale,
    Purchase,
}

/// Herd animal
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub animal_type: String,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_price: Option<f64>,
    pub status: AnimalStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sale or purchase of a specific animal
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnimalTransaction {
    pub id: Uuid,
    pub animal_id: Uuid,
    #[serde(rename = "type")]
    pub kind: TradeKind,
    pub date: DateTime<Utc>,
    pub price: f64,
    pub buyer: Option<String>,
    pub buyer_phone: Option<String>,
    pub seller: Option<String>,
    pub seller_phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Milk sold or bought
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MilkTransaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TradeKind,
    pub date: DateTime<Utc>,
    pub quantity: f64,
    pub price_per_liter: f64,
    pub total_amount: f64,
    pub buyer: Option<String>,
    pub buyer_phone: Option<String>,
    pub seller: Option<String>,
    pub seller_phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fodder bought for the herd
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FodderPurchase {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub quantity: f64,
    pub price_per_kg: f64,
    pub total_amount: f64,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Daily fodder consumption entry
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FodderConsumption {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub quantity: f64,
    pub animal_id: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for POST /animals
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAnimalRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub animal_type: String,
    pub breed: Option<String>,
    #[validate(range(min = 0))]
    pub age: Option<i32>,
    pub purchase_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0.0))]
    pub purchase_price: Option<f64>,
    pub status: Option<AnimalStatus>,
}

/// Request body for POST /animals/:id/sale and /animals/:id/purchase
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnimalTradeRequest {
    pub date: DateTime<Utc>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub buyer: Option<String>,
    pub buyer_phone: Option<String>,
    pub seller: Option<String>,
    pub seller_phone: Option<String>,
    pub notes: Option<String>,
}

/// Request body for POST /milk/sale and /milk/purchase
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MilkTradeRequest {
    pub date: DateTime<Utc>,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(range(min = 0.0))]
    pub price_per_liter: f64,
    #[validate(range(min = 0.0))]
    pub total_amount: f64,
    pub buyer: Option<String>,
    pub buyer_phone: Option<String>,
    pub seller: Option<String>,
    pub seller_phone: Option<String>,
    pub notes: Option<String>,
}

/// Request body for POST /fodder/purchases
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FodderPurchaseRequest {
    pub date: DateTime<Utc>,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    #[validate(range(min = 0.0))]
    pub price_per_kg: f64,
    #[validate(range(min = 0.0))]
    pub total_amount: f64,
    pub supplier: Option<String>,
    pub notes: Option<String>,
}

/// Request body for POST /fodder/consumptions
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FodderConsumptionRequest {
    pub date: DateTime<Utc>,
    #[validate(range(min = 0.0))]
    pub quantity: f64,
    pub animal_id: Option<Uuid>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_request_field_names() {
        let req: NewAnimalRequest = serde_json::from_str(
            r#"{"name":"Ganga","type":"cow","breed":"Gir","age":4,"purchasePrice":45000.0}"#,
        )
        .unwrap();

        assert_eq!(req.animal_type, "cow");
        assert_eq!(req.age, Some(4));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let req: MilkTradeRequest = serde_json::from_str(
            r#"{"date":"2025-08-01T06:00:00Z","quantity":10.0,"pricePerLiter":-5.0,"totalAmount":0.0}"#,
        )
        .unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("pricePerLiter") ||
                errors.field_errors().contains_key("price_per_liter"));
    }

    #[test]
    fn test_trade_kind_serde() {
        assert_eq!(serde_json::to_string(&TradeKind::Sale).unwrap(), "\"sale\"");
        assert_eq!(
            serde_json::from_str::<AnimalStatus>("\"deceased\"").unwrap(),
            AnimalStatus::Deceased
        );
    }
}
