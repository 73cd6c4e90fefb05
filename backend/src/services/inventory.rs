//! Inventory catalog service
//!
//! One catalog backs both the inventory screens and the distribution
//! reconciler; distribution confirmation decrements these records.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use shared::{filter_materials, MaterialCategory, MaterialFilter, MaterialStock};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Inventory service for the material catalog
#[derive(Clone)]
pub struct InventoryService {
    store: Store,
}

/// Input for creating or replacing a material record
#[derive(Debug, Deserialize, Validate)]
pub struct MaterialInput {
    #[validate(length(min = 1, message = "Material name must not be empty"))]
    pub name: String,
    pub category: MaterialCategory,
    pub quantity: u32,
    #[validate(length(min = 1, message = "Unit must not be empty"))]
    pub unit: String,
    pub cost_per_unit: Decimal,
    #[validate(length(min = 1, message = "Supplier must not be empty"))]
    pub supplier: String,
    pub min_threshold: u32,
}

impl InventoryService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List catalog records matching a filter, ordered by name
    pub async fn list(&self, filter: &MaterialFilter) -> Vec<MaterialStock> {
        let store = self.store.read().await;
        let all: Vec<MaterialStock> = store.materials.values().cloned().collect();
        let mut matched = filter_materials(&all, filter);
        matched.sort_by(|a, b| a.name.cmp(&b.name));
        matched
    }

    pub async fn get(&self, id: Uuid) -> AppResult<MaterialStock> {
        let store = self.store.read().await;
        store
            .materials
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Material".to_string()))
    }

    /// Create a material record with a fresh id
    pub async fn create(&self, input: MaterialInput) -> AppResult<MaterialStock> {
        Self::validate(&input)?;

        let material = MaterialStock {
            id: Uuid::new_v4(),
            name: input.name,
            category: input.category,
            quantity: input.quantity,
            unit: input.unit,
            cost_per_unit: input.cost_per_unit,
            supplier: input.supplier,
            min_threshold: input.min_threshold,
            last_updated: Utc::now(),
            version: 0,
        };

        let mut store = self.store.write().await;
        store.materials.insert(material.id, material.clone());
        Ok(material)
    }

    /// Full replace of an existing record's mutable fields
    pub async fn replace(&self, id: Uuid, input: MaterialInput) -> AppResult<MaterialStock> {
        Self::validate(&input)?;

        let mut store = self.store.write().await;
        let material = store
            .materials
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Material".to_string()))?;

        material.name = input.name;
        material.category = input.category;
        material.quantity = input.quantity;
        material.unit = input.unit;
        material.cost_per_unit = input.cost_per_unit;
        material.supplier = input.supplier;
        material.min_threshold = input.min_threshold;
        material.last_updated = Utc::now();
        material.version += 1;

        Ok(material.clone())
    }

    /// Records whose derived status is below Active, for the reorder report
    pub async fn low_stock(&self) -> Vec<MaterialStock> {
        let store = self.store.read().await;
        let mut low: Vec<MaterialStock> = store
            .materials
            .values()
            .filter(|m| m.status() != shared::StockStatus::Active)
            .cloned()
            .collect();
        low.sort_by(|a, b| a.quantity.cmp(&b.quantity));
        low
    }

    fn validate(input: &MaterialInput) -> AppResult<()> {
        input
            .validate()
            .map_err(AppError::from_validation_errors)?;
        if input.cost_per_unit < Decimal::ZERO {
            return Err(AppError::Validation {
                field: "cost_per_unit".to_string(),
                message: "Unit cost cannot be negative".to_string(),
            });
        }
        Ok(())
    }
}
