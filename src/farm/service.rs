//! Farm ledger service
//!
//! Persistence for the bookkeeping collections. Recording a trade against a
//! specific animal also flips the animal's status, so the pair runs in a
//! transaction.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use super::model::{
    Animal, AnimalStatus, AnimalTradeRequest, AnimalTransaction, FodderConsumption,
    FodderConsumptionRequest, FodderPurchase, FodderPurchaseRequest, MilkTradeRequest,
    MilkTransaction, NewAnimalRequest, TradeKind,
};

/// Farm ledger service
#[derive(Clone)]
pub struct FarmService {
    pool: PgPool,
}

impl FarmService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_animals(&self) -> Result<Vec<Animal>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, name, animal_type, breed, age, purchase_date, purchase_price,
                   status, created_at, updated_at
            FROM animals
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_animal(&self, req: NewAnimalRequest) -> Result<Animal, sqlx::Error> {
        let now = Utc::now();

        sqlx::query_as(
            r#"
            INSERT INTO animals (id, name, animal_type, breed, age, purchase_date,
                                 purchase_price, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, name, animal_type, breed, age, purchase_date, purchase_price,
                      status, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.animal_type)
        .bind(&req.breed)
        .bind(req.age)
        .bind(req.purchase_date)
        .bind(req.purchase_price)
        .bind(req.status.unwrap_or(AnimalStatus::Active))
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_animal_transactions(&self) -> Result<Vec<AnimalTransaction>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, animal_id, kind, date, price, buyer, buyer_phone, seller,
                   seller_phone, notes, created_at
            FROM animal_transactions
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Record a sale or purchase of a specific animal and update its
    /// status (sold after a sale, active after a purchase).
    ///
    /// Returns `None` when the animal does not exist.
    pub async fn record_animal_trade(
        &self,
        animal_id: Uuid,
        kind: TradeKind,
        req: AnimalTradeRequest,
    ) -> Result<Option<AnimalTransaction>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let exists: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM animals WHERE id = $1")
            .bind(animal_id)
            .fetch_optional(&mut *tx)
            .await?;

        if exists.is_none() {
            return Ok(None);
        }

        let transaction: AnimalTransaction = sqlx::query_as(
            r#"
            INSERT INTO animal_transactions (id, animal_id, kind, date, price, buyer,
                                             buyer_phone, seller, seller_phone, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, animal_id, kind, date, price, buyer, buyer_phone, seller,
                      seller_phone, notes, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(animal_id)
        .bind(kind)
        .bind(req.date)
        .bind(req.price)
        .bind(&req.buyer)
        .bind(&req.buyer_phone)
        .bind(&req.seller)
        .bind(&req.seller_phone)
        .bind(&req.notes)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let new_status = match kind {
            TradeKind::Sale => AnimalStatus::Sold,
            TradeKind::Purchase => AnimalStatus::Active,
        };

        sqlx::query("UPDATE animals SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(new_status)
            .bind(Utc::now())
            .bind(animal_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(transaction))
    }

    pub async fn list_milk_transactions(&self) -> Result<Vec<MilkTransaction>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, kind, date, quantity, price_per_liter, total_amount, buyer,
                   buyer_phone, seller, seller_phone, notes, created_at
            FROM milk_transactions
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_milk_transaction(
        &self,
        kind: TradeKind,
        req: MilkTradeRequest,
    ) -> Result<MilkTransaction, sqlx::Error> {
        sqlx::query_as(
            r#"
            INSERT INTO milk_transactions (id, kind, date, quantity, price_per_liter,
                                           total_amount, buyer, buyer_phone, seller,
                                           seller_phone, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, kind, date, quantity, price_per_liter, total_amount, buyer,
                      buyer_phone, seller, seller_phone, notes, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(kind)
        .bind(req.date)
        .bind(req.quantity)
        .bind(req.price_per_liter)
        .bind(req.total_amount)
        .bind(&req.buyer)
        .bind(&req.buyer_phone)
        .bind(&req.seller)
        .bind(&req.seller_phone)
        .bind(&req.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_fodder_purchases(&self) -> Result<Vec<FodderPurchase>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, date, quantity, price_per_kg, total_amount, supplier, notes, created_at
            FROM fodder_purchases
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_fodder_purchase(
        &self,
        req: FodderPurchaseRequest,
    ) -> Result<FodderPurchase, sqlx::Error> {
        sqlx::query_as(
            r#"
            INSERT INTO fodder_purchases (id, date, quantity, price_per_kg, total_amount,
                                          supplier, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, date, quantity, price_per_kg, total_amount, supplier, notes, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.date)
        .bind(req.quantity)
        .bind(req.price_per_kg)
        .bind(req.total_amount)
        .bind(&req.supplier)
        .bind(&req.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }

    pub async fn list_fodder_consumptions(&self) -> Result<Vec<FodderConsumption>, sqlx::Error> {
        sqlx::query_as(
            r#"
            SELECT id, date, quantity, animal_id, notes, created_at
            FROM fodder_consumptions
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    pub async fn create_fodder_consumption(
        &self,
        req: FodderConsumptionRequest,
    ) -> Result<FodderConsumption, sqlx::Error> {
        sqlx::query_as(
            r#"
            INSERT INTO fodder_consumptions (id, date, quantity, animal_id, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, date, quantity, animal_id, notes, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.date)
        .bind(req.quantity)
        .bind(req.animal_id)
        .bind(&req.notes)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }
}
