//! Material stock models for the inventory catalog

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A raw-material stock record in the inventory catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialStock {
    pub id: Uuid,
    pub name: String,
    pub category: MaterialCategory,
    pub quantity: u32,
    pub unit: String,
    pub cost_per_unit: Decimal,
    pub supplier: String,
    /// Reorder point; stock status is derived from quantity against this
    pub min_threshold: u32,
    pub last_updated: DateTime<Utc>,
    /// Bumped on every replace, used for optimistic concurrency
    pub version: u64,
}

impl MaterialStock {
    /// Derived stock status, never stored
    pub fn status(&self) -> StockStatus {
        if self.quantity == 0 {
            StockStatus::Inactive
        } else if (self.quantity as u64) * 2 < self.min_threshold as u64 {
            StockStatus::LowStock
        } else if self.quantity < self.min_threshold {
            StockStatus::Warning
        } else {
            StockStatus::Active
        }
    }
}

/// Material categories carried by the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    Fabric,
    Thread,
    Accessory,
    Packaging,
    Dye,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialCategory::Fabric => write!(f, "Fabric"),
            MaterialCategory::Thread => write!(f, "Thread"),
            MaterialCategory::Accessory => write!(f, "Accessory"),
            MaterialCategory::Packaging => write!(f, "Packaging"),
            MaterialCategory::Dye => write!(f, "Dye"),
        }
    }
}

/// Stock status classification derived from quantity and reorder threshold
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Quantity is zero
    Inactive,
    /// Below half the reorder threshold
    LowStock,
    /// Below the reorder threshold
    Warning,
    /// At or above the reorder threshold
    Active,
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Inactive => write!(f, "Inactive"),
            StockStatus::LowStock => write!(f, "Low Stock"),
            StockStatus::Warning => write!(f, "Warning"),
            StockStatus::Active => write!(f, "Active"),
        }
    }
}
