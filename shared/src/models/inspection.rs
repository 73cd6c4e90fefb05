//! Quality-control inspection models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::request::Priority;

/// A QC inspection assigned against a production batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QcInspection {
    pub id: Uuid,
    pub batch_id: Uuid,
    pub batch_name: String,
    pub product_code: String,
    pub stage: String,
    pub quantity: u32,
    pub priority: Priority,
    pub factory_id: Uuid,
    pub factory_name: String,
    pub assigned_to: String,
    pub status: InspectionStatus,
    pub created_at: DateTime<Utc>,
    pub due_date: NaiveDate,
    pub notes: String,
    #[serde(default)]
    pub defects: Vec<Defect>,
}

/// Inspection lifecycle: pending -> in_progress -> completed | failed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InspectionStatus {
    Pending,
    InProgress,
    Completed,
    Failed,
}

impl InspectionStatus {
    /// Whether this status may move to `next`
    pub fn can_transition(&self, next: InspectionStatus) -> bool {
        matches!(
            (self, next),
            (InspectionStatus::Pending, InspectionStatus::InProgress)
                | (InspectionStatus::InProgress, InspectionStatus::Completed)
                | (InspectionStatus::InProgress, InspectionStatus::Failed)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, InspectionStatus::Completed | InspectionStatus::Failed)
    }
}

impl std::fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InspectionStatus::Pending => write!(f, "Pending"),
            InspectionStatus::InProgress => write!(f, "In Progress"),
            InspectionStatus::Completed => write!(f, "Completed"),
            InspectionStatus::Failed => write!(f, "Failed"),
        }
    }
}

/// A defect found during inspection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defect {
    pub defect_type: String,
    pub description: String,
    pub severity: DefectSeverity,
}

/// Defect severity grading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DefectSeverity {
    Minor,
    Major,
    Critical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_transitions() {
        assert!(InspectionStatus::Pending.can_transition(InspectionStatus::InProgress));
        assert!(InspectionStatus::InProgress.can_transition(InspectionStatus::Completed));
        assert!(InspectionStatus::InProgress.can_transition(InspectionStatus::Failed));
    }

    #[test]
    fn test_invalid_transitions() {
        // Skipping the in-progress stage
        assert!(!InspectionStatus::Pending.can_transition(InspectionStatus::Completed));
        assert!(!InspectionStatus::Pending.can_transition(InspectionStatus::Failed));
        // Backward
        assert!(!InspectionStatus::InProgress.can_transition(InspectionStatus::Pending));
        // From terminal states
        assert!(!InspectionStatus::Completed.can_transition(InspectionStatus::InProgress));
        assert!(!InspectionStatus::Failed.can_transition(InspectionStatus::InProgress));
    }

    #[test]
    fn test_terminal_states() {
        assert!(InspectionStatus::Completed.is_terminal());
        assert!(InspectionStatus::Failed.is_terminal());
        assert!(!InspectionStatus::Pending.is_terminal());
        assert!(!InspectionStatus::InProgress.is_terminal());
    }
}
