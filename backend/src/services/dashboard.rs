//! Dashboard aggregation service
//!
//! Read-side counters derived from the registries on every access. The
//! lists are small and session-local, so there is no cache to invalidate.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;

use shared::{
    dashboard_layout, ChartSpec, DashboardRole, InspectionStatus, Priority, RequestStatus,
};

use crate::store::Store;

/// Dashboard service
#[derive(Clone)]
pub struct DashboardService {
    store: Store,
}

/// Request-side counters for badges and summary cards
#[derive(Debug, Serialize)]
pub struct RequestSummary {
    pub total: usize,
    pub pending_count: usize,
    /// Priority urgent and still pending
    pub urgent_count: usize,
    /// Created on the current calendar day
    pub today_count: usize,
    pub approved_count: usize,
    pub denied_count: usize,
    pub factories: Vec<FactorySummary>,
}

/// Per-factory request resolution
#[derive(Debug, Serialize)]
pub struct FactorySummary {
    pub factory: String,
    pub total: usize,
    pub pending: usize,
    /// Resolved requests vs. total, in percent
    pub completion_percent: u32,
}

/// Inspection-side counters
#[derive(Debug, Serialize)]
pub struct InspectionSummary {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub failed: usize,
    /// Failed vs. all closed inspections, in percent
    pub failure_percent: u32,
}

/// Full dashboard payload
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub requests: RequestSummary,
    pub inspections: InspectionSummary,
}

impl DashboardService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Ordered chart layout for a role
    pub fn layout(role: DashboardRole) -> Vec<ChartSpec> {
        dashboard_layout(role)
    }

    /// Recompute all counters from the registries
    pub async fn summary(&self) -> DashboardSummary {
        let store = self.store.read().await;
        let today = Utc::now().date_naive();

        let mut pending_count = 0;
        let mut urgent_count = 0;
        let mut today_count = 0;
        let mut approved_count = 0;
        let mut denied_count = 0;
        let mut factories: BTreeMap<String, (usize, usize, usize)> = BTreeMap::new();

        for request in store.requests.values() {
            match request.status {
                RequestStatus::Pending => pending_count += 1,
                RequestStatus::Approved => approved_count += 1,
                RequestStatus::Denied => denied_count += 1,
            }
            if request.priority == Priority::Urgent && request.status == RequestStatus::Pending {
                urgent_count += 1;
            }
            if request.created_date.date_naive() == today {
                today_count += 1;
            }
            let entry = factories.entry(request.factory.clone()).or_default();
            entry.0 += 1;
            if request.status == RequestStatus::Pending {
                entry.1 += 1;
            } else {
                entry.2 += 1;
            }
        }

        let factories = factories
            .into_iter()
            .map(|(factory, (total, pending, resolved))| FactorySummary {
                factory,
                total,
                pending,
                completion_percent: percent(resolved, total),
            })
            .collect();

        let mut inspections = InspectionSummary {
            pending: 0,
            in_progress: 0,
            completed: 0,
            failed: 0,
            failure_percent: 0,
        };
        for inspection in store.inspections.values() {
            match inspection.status {
                InspectionStatus::Pending => inspections.pending += 1,
                InspectionStatus::InProgress => inspections.in_progress += 1,
                InspectionStatus::Completed => inspections.completed += 1,
                InspectionStatus::Failed => inspections.failed += 1,
            }
        }
        inspections.failure_percent = percent(
            inspections.failed,
            inspections.completed + inspections.failed,
        );

        DashboardSummary {
            requests: RequestSummary {
                total: store.requests.len(),
                pending_count,
                urgent_count,
                today_count,
                approved_count,
                denied_count,
                factories,
            },
            inspections,
        }
    }
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}
