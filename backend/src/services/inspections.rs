//! QC inspection service
//!
//! Inspections follow pending -> in_progress -> completed | failed; any
//! other move is rejected.

use serde::Deserialize;
use uuid::Uuid;

use shared::{Defect, InspectionStatus, QcInspection};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Inspection service
#[derive(Clone)]
pub struct InspectionService {
    store: Store,
}

/// Input for closing out an inspection
#[derive(Debug, Deserialize, Default)]
pub struct CloseInspectionInput {
    #[serde(default)]
    pub defects: Vec<Defect>,
    pub notes: Option<String>,
}

impl InspectionService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// List inspections, optionally narrowed by status, ordered by due date
    pub async fn list(&self, status: Option<InspectionStatus>) -> Vec<QcInspection> {
        let store = self.store.read().await;
        let mut inspections: Vec<QcInspection> = store
            .inspections
            .values()
            .filter(|i| status.map_or(true, |s| i.status == s))
            .cloned()
            .collect();
        inspections.sort_by(|a, b| a.due_date.cmp(&b.due_date).then(a.id.cmp(&b.id)));
        inspections
    }

    pub async fn get(&self, id: Uuid) -> AppResult<QcInspection> {
        let store = self.store.read().await;
        store
            .inspections
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Inspection".to_string()))
    }

    /// Move a pending inspection to in-progress
    pub async fn start(&self, id: Uuid) -> AppResult<QcInspection> {
        self.transition(id, InspectionStatus::InProgress, CloseInspectionInput::default())
            .await
    }

    /// Complete an in-progress inspection
    pub async fn complete(&self, id: Uuid, input: CloseInspectionInput) -> AppResult<QcInspection> {
        self.transition(id, InspectionStatus::Completed, input).await
    }

    /// Fail an in-progress inspection, recording the defects found
    pub async fn fail(&self, id: Uuid, input: CloseInspectionInput) -> AppResult<QcInspection> {
        self.transition(id, InspectionStatus::Failed, input).await
    }

    async fn transition(
        &self,
        id: Uuid,
        next: InspectionStatus,
        input: CloseInspectionInput,
    ) -> AppResult<QcInspection> {
        let mut store = self.store.write().await;
        let inspection = store
            .inspections
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Inspection".to_string()))?;

        if !inspection.status.can_transition(next) {
            return Err(AppError::InvalidStateTransition(format!(
                "Inspection cannot move from {} to {}",
                inspection.status, next
            )));
        }

        inspection.status = next;
        inspection.defects.extend(input.defects);
        if let Some(notes) = input.notes {
            inspection.notes = notes;
        }
        Ok(inspection.clone())
    }
}
