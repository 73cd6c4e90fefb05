//! Production batch service

use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use shared::{validate_batch_dates, BatchStatus, ProductionBatch};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Batch service
#[derive(Clone)]
pub struct BatchService {
    store: Store,
}

/// Input for creating a batch; the product is referenced by code
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBatchInput {
    pub product_code: String,
    #[validate(length(min = 1, message = "Batch code must not be empty"))]
    pub code: String,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: u32,
    #[validate(length(min = 1, message = "Factory must not be empty"))]
    pub factory: String,
    #[serde(default = "default_stage")]
    pub stage: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

fn default_stage() -> String {
    "cutting".to_string()
}

/// Partial update of a batch
#[derive(Debug, Deserialize, Default)]
pub struct UpdateBatchInput {
    pub quantity: Option<u32>,
    pub done_qty: Option<u32>,
    pub stage: Option<String>,
    pub status: Option<BatchStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub expected_version: Option<u64>,
}

impl BatchService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List batches ordered by code
    pub async fn list(&self) -> Vec<ProductionBatch> {
        let store = self.store.read().await;
        let mut batches: Vec<ProductionBatch> = store.batches.values().cloned().collect();
        batches.sort_by(|a, b| a.code.cmp(&b.code));
        batches
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ProductionBatch> {
        let store = self.store.read().await;
        store
            .batches
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Batch".to_string()))
    }

    /// Create a batch against an existing product
    pub async fn create(&self, input: CreateBatchInput) -> AppResult<ProductionBatch> {
        input
            .validate()
            .map_err(AppError::from_validation_errors)?;
        validate_batch_dates(input.start_date, input.end_date).map_err(|message| {
            AppError::Validation {
                field: "end_date".to_string(),
                message: message.to_string(),
            }
        })?;

        let mut store = self.store.write().await;
        let product = store
            .products
            .values()
            .find(|p| p.code == input.product_code)
            .ok_or_else(|| AppError::NotFound("Product".to_string()))?;

        let now = Utc::now();
        let batch = ProductionBatch {
            id: Uuid::new_v4(),
            code: input.code,
            product_id: product.id,
            product_code: product.code.clone(),
            factory: input.factory,
            stage: input.stage,
            done_qty: 0,
            total_qty: input.quantity,
            status: BatchStatus::InProgress,
            start_date: input.start_date,
            end_date: input.end_date,
            created_at: now,
            updated_at: now,
            version: 0,
        };
        store.batches.insert(batch.id, batch.clone());
        Ok(batch)
    }

    /// Update a batch; the date invariant is revalidated after the merge
    pub async fn update(&self, id: Uuid, input: UpdateBatchInput) -> AppResult<ProductionBatch> {
        let mut store = self.store.write().await;
        let batch = store
            .batches
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Batch".to_string()))?;

        if let Some(expected) = input.expected_version {
            if expected != batch.version {
                return Err(AppError::Conflict {
                    resource: "batch".to_string(),
                    message: "Batch was modified by another operator".to_string(),
                });
            }
        }

        let start = input.start_date.unwrap_or(batch.start_date);
        let end = input.end_date.unwrap_or(batch.end_date);
        validate_batch_dates(start, end).map_err(|message| AppError::Validation {
            field: "end_date".to_string(),
            message: message.to_string(),
        })?;

        if let Some(quantity) = input.quantity {
            if quantity == 0 {
                return Err(AppError::Validation {
                    field: "quantity".to_string(),
                    message: "Quantity must be positive".to_string(),
                });
            }
            batch.total_qty = quantity;
        }
        if let Some(done) = input.done_qty {
            batch.done_qty = done;
        }
        if let Some(stage) = input.stage {
            batch.stage = stage;
        }
        if let Some(status) = input.status {
            batch.status = status;
        }
        batch.start_date = start;
        batch.end_date = end;
        batch.updated_at = Utc::now();
        batch.version += 1;

        Ok(batch.clone())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let mut store = self.store.write().await;
        store
            .batches
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Batch".to_string()))
    }
}
