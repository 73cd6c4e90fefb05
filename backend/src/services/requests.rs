//! Request registry service and the request lifecycle
//!
//! Requests resolve from pending to approved or denied, both terminal.
//! Bulk approval reports a per-item outcome so callers can surface partial
//! failure instead of guessing.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{
    filter_requests, sort_requests, validate_factory_name, validate_line_quantity,
    CorrectionDetails, MaterialLineItem, Priority, QualityIssue, Request, RequestFilter,
    RequestSortKey, RequestStatus, RequestType, Requester,
};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Request registry service
#[derive(Clone)]
pub struct RequestService {
    store: Store,
}

/// Input for creating a request
#[derive(Debug, Deserialize)]
pub struct CreateRequestInput {
    pub request_type: RequestType,
    pub priority: Priority,
    pub requested_by: Requester,
    pub factory: String,
    pub batch_id: Option<String>,
    pub due_date: NaiveDate,
    /// Material lines, required for material requests
    #[serde(default)]
    pub materials: Vec<RequestLineInput>,
    pub correction_details: Option<CorrectionDetails>,
    pub quality_issue: Option<QualityIssue>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub attachments: Vec<String>,
}

/// One requested material line; name, stock, and price are snapshotted
/// from the catalog at creation time
#[derive(Debug, Deserialize)]
pub struct RequestLineInput {
    pub material_id: Uuid,
    pub requested_qty: u32,
}

/// Per-item result of a bulk approval
#[derive(Debug, Serialize)]
pub struct BatchApproveOutcome {
    pub id: String,
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RequestService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List requests matching a filter, in the given sort order
    pub async fn list(&self, filter: &RequestFilter, sort: RequestSortKey) -> Vec<Request> {
        let store = self.store.read().await;
        let mut all: Vec<Request> = store.requests.values().cloned().collect();
        // Stable-sort ties need a deterministic input order from the map
        all.sort_by(|a, b| a.id.cmp(&b.id));
        let mut matched = filter_requests(&all, filter, Utc::now().date_naive());
        sort_requests(&mut matched, sort);
        matched
    }

    pub async fn get(&self, id: &str) -> AppResult<Request> {
        let store = self.store.read().await;
        store
            .requests
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Request".to_string()))
    }

    /// Create a request, validating the type-specific payload
    pub async fn create(&self, input: CreateRequestInput) -> AppResult<Request> {
        validate_factory_name(&input.factory).map_err(|message| AppError::Validation {
            field: "factory".to_string(),
            message: message.to_string(),
        })?;

        match input.request_type {
            RequestType::Material => {
                if input.materials.is_empty() {
                    return Err(AppError::Validation {
                        field: "materials".to_string(),
                        message: "A material request needs at least one line".to_string(),
                    });
                }
            }
            RequestType::Correction => {
                if input.correction_details.is_none() {
                    return Err(AppError::Validation {
                        field: "correction_details".to_string(),
                        message: "A correction request needs correction details".to_string(),
                    });
                }
            }
            RequestType::Quality | RequestType::Urgent => {
                if input.quality_issue.is_none() {
                    return Err(AppError::Validation {
                        field: "quality_issue".to_string(),
                        message: "A quality request needs an issue description".to_string(),
                    });
                }
            }
        }

        let mut store = self.store.write().await;

        // Snapshot catalog values onto the lines
        let mut materials = Vec::with_capacity(input.materials.len());
        for line in &input.materials {
            validate_line_quantity(line.requested_qty).map_err(|message| {
                AppError::Validation {
                    field: "requested_qty".to_string(),
                    message: message.to_string(),
                }
            })?;
            let material = store
                .materials
                .get(&line.material_id)
                .ok_or_else(|| AppError::NotFound("Material".to_string()))?;
            materials.push(MaterialLineItem {
                material_id: material.id,
                material_name: material.name.clone(),
                requested_qty: line.requested_qty,
                approved_qty: 0,
                unit: material.unit.clone(),
                current_stock: material.quantity,
                unit_price: material.cost_per_unit,
            });
        }

        let request = Request {
            id: store.allocate_request_id(),
            request_type: input.request_type,
            priority: input.priority,
            status: RequestStatus::Pending,
            requested_by: input.requested_by,
            factory: input.factory,
            batch_id: input.batch_id,
            created_date: Utc::now(),
            due_date: input.due_date,
            responded_date: None,
            materials,
            correction_details: input.correction_details,
            quality_issue: input.quality_issue,
            notes: input.notes,
            response_notes: None,
            attachments: input.attachments,
        };

        store.requests.insert(request.id.clone(), request.clone());
        tracing::info!(id = %request.id, "request created");
        Ok(request)
    }

    /// Approve a pending request
    pub async fn approve(&self, id: &str, response_notes: Option<String>) -> AppResult<Request> {
        let mut store = self.store.write().await;
        Self::resolve(store.requests.get_mut(id), id, RequestStatus::Approved, response_notes)
    }

    /// Deny a pending request
    pub async fn deny(&self, id: &str, response_notes: Option<String>) -> AppResult<Request> {
        let mut store = self.store.write().await;
        Self::resolve(store.requests.get_mut(id), id, RequestStatus::Denied, response_notes)
    }

    /// All-or-nothing gate for the bulk-approve action: true iff every
    /// referenced request exists and is still pending
    pub async fn can_approve_all(&self, ids: &[String]) -> bool {
        let store = self.store.read().await;
        !ids.is_empty()
            && ids.iter().all(|id| {
                store
                    .requests
                    .get(id)
                    .map(|r| r.status == RequestStatus::Pending)
                    .unwrap_or(false)
            })
    }

    /// Approve each request independently, reporting per-item outcomes
    pub async fn batch_approve(&self, ids: &[String]) -> Vec<BatchApproveOutcome> {
        let mut store = self.store.write().await;
        ids.iter()
            .map(|id| {
                match Self::resolve(
                    store.requests.get_mut(id),
                    id,
                    RequestStatus::Approved,
                    None,
                ) {
                    Ok(_) => BatchApproveOutcome {
                        id: id.clone(),
                        approved: true,
                        error: None,
                    },
                    Err(err) => BatchApproveOutcome {
                        id: id.clone(),
                        approved: false,
                        error: Some(err.to_string()),
                    },
                }
            })
            .collect()
    }

    fn resolve(
        request: Option<&mut Request>,
        id: &str,
        status: RequestStatus,
        response_notes: Option<String>,
    ) -> AppResult<Request> {
        let request = request.ok_or_else(|| AppError::NotFound("Request".to_string()))?;
        if request.status.is_resolved() {
            return Err(AppError::InvalidStateTransition(format!(
                "Request {} is already {}",
                id, request.status
            )));
        }
        request.status = status;
        request.responded_date = Some(Utc::now());
        if response_notes.is_some() {
            request.response_notes = response_notes;
        }
        tracing::info!(id = %request.id, status = %request.status, "request resolved");
        Ok(request.clone())
    }
}
