//! Request registry models and the request lifecycle

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::inspection::DefectSeverity;

/// A request raised by line staff against the operations team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Display id in the form "R-0001"
    pub id: String,
    pub request_type: RequestType,
    pub priority: Priority,
    pub status: RequestStatus,
    pub requested_by: Requester,
    pub factory: String,
    pub batch_id: Option<String>,
    pub created_date: DateTime<Utc>,
    pub due_date: NaiveDate,
    pub responded_date: Option<DateTime<Utc>>,
    /// Line items, populated only for material requests
    #[serde(default)]
    pub materials: Vec<MaterialLineItem>,
    pub correction_details: Option<CorrectionDetails>,
    pub quality_issue: Option<QualityIssue>,
    pub notes: String,
    pub response_notes: Option<String>,
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// Person raising a request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requester {
    pub id: Uuid,
    pub name: String,
}

/// Kinds of requests line staff can raise
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    Material,
    Correction,
    Quality,
    Urgent,
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestType::Material => write!(f, "Material"),
            RequestType::Correction => write!(f, "Correction"),
            RequestType::Quality => write!(f, "Quality"),
            RequestType::Urgent => write!(f, "Urgent"),
        }
    }
}

/// Request priority, ordered for sorting
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Numeric rank used by the sort engine (urgent highest)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Urgent => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

/// Lifecycle status: pending requests resolve to approved or denied,
/// both terminal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Approved,
    Denied,
}

impl RequestStatus {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "Pending"),
            RequestStatus::Approved => write!(f, "Approved"),
            RequestStatus::Denied => write!(f, "Denied"),
        }
    }
}

/// A material line embedded in a request or a distribution
///
/// Stock and price are snapshots taken when the line was written, not live
/// catalog values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialLineItem {
    pub material_id: Uuid,
    pub material_name: String,
    pub requested_qty: u32,
    pub approved_qty: u32,
    pub unit: String,
    pub current_stock: u32,
    pub unit_price: Decimal,
}

/// Payload for correction requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectionDetails {
    pub batch_code: String,
    pub defect_summary: String,
    pub affected_qty: u32,
}

/// Payload for quality requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityIssue {
    pub stage: String,
    pub description: String,
    pub severity: DefectSeverity,
}

/// Outcome of a confirmed material distribution, consumed by the request
/// registry to resolve the originating request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistributionResult {
    pub request_id: String,
    pub lines: Vec<MaterialLineItem>,
    /// Distinct materials selected vs. requested, in percent
    pub material_coverage_percent: u32,
    /// Approved quantity vs. requested quantity across all lines, in percent
    pub quantity_fulfillment_percent: u32,
    pub total_cost: Decimal,
    pub distributed_at: DateTime<Utc>,
}

/// Format a registry sequence number as a display id
pub fn format_request_id(sequence: u32) -> String {
    format!("R-{:04}", sequence)
}
