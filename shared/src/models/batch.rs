//! Production batch models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A production lot moving through the factory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionBatch {
    pub id: Uuid,
    /// Batch code (e.g., "B-2024-0113")
    pub code: String,
    pub product_id: Uuid,
    /// Product code snapshot at batch creation
    pub product_code: String,
    pub factory: String,
    pub stage: String,
    pub done_qty: u32,
    pub total_qty: u32,
    pub status: BatchStatus,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Bumped on every update, used for optimistic concurrency
    pub version: u64,
}

impl ProductionBatch {
    /// Completion ratio in [0, 1]; an empty batch reports zero
    pub fn progress(&self) -> f64 {
        if self.total_qty == 0 {
            return 0.0;
        }
        (self.done_qty as f64 / self.total_qty as f64).clamp(0.0, 1.0)
    }
}

/// Batch lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    InProgress,
    QcPending,
    Completed,
}

impl std::fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchStatus::InProgress => write!(f, "In Progress"),
            BatchStatus::QcPending => write!(f, "QC Pending"),
            BatchStatus::Completed => write!(f, "Completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(done: u32, total: u32) -> ProductionBatch {
        ProductionBatch {
            id: Uuid::new_v4(),
            code: "B-2024-0001".to_string(),
            product_id: Uuid::new_v4(),
            product_code: "HAT01".to_string(),
            factory: "Riverside".to_string(),
            stage: "stitching".to_string(),
            done_qty: done,
            total_qty: total,
            status: BatchStatus::InProgress,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            version: 0,
        }
    }

    #[test]
    fn test_progress_in_range() {
        assert_eq!(batch(0, 100).progress(), 0.0);
        assert_eq!(batch(50, 100).progress(), 0.5);
        assert_eq!(batch(100, 100).progress(), 1.0);
    }

    #[test]
    fn test_progress_clamped() {
        // Done above total clamps to 1.0 rather than overshooting
        assert_eq!(batch(120, 100).progress(), 1.0);
    }

    #[test]
    fn test_progress_empty_batch() {
        assert_eq!(batch(0, 0).progress(), 0.0);
    }
}
