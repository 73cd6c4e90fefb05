//! Pure filter and sort engine over the request registry and the
//! inventory catalog
//!
//! Filtering never mutates its input; every dimension combines with logical
//! AND, and an empty multi-select set means "no restriction". Sorting uses
//! the standard library's stable sort, so ties keep their input order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    MaterialCategory, MaterialStock, Priority, Request, RequestStatus, RequestType, StockStatus,
};

/// Predicate bag for narrowing the request registry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestFilter {
    /// Case-insensitive substring match over id, factory, and requester name
    pub search: Option<String>,
    #[serde(default)]
    pub types: Vec<RequestType>,
    #[serde(default)]
    pub statuses: Vec<RequestStatus>,
    #[serde(default)]
    pub priorities: Vec<Priority>,
    #[serde(default)]
    pub factories: Vec<String>,
    #[serde(default)]
    pub quick: QuickFilter,
}

/// Single-select quick filter, applied as an additional AND term
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuickFilter {
    #[default]
    All,
    /// Priority urgent and still pending
    Urgent,
    /// Created on the given calendar day
    Today,
    Pending,
    Material,
    Correction,
}

impl QuickFilter {
    pub fn matches(&self, request: &Request, today: NaiveDate) -> bool {
        match self {
            QuickFilter::All => true,
            QuickFilter::Urgent => {
                request.priority == Priority::Urgent && request.status == RequestStatus::Pending
            }
            QuickFilter::Today => request.created_date.date_naive() == today,
            QuickFilter::Pending => request.status == RequestStatus::Pending,
            QuickFilter::Material => request.request_type == RequestType::Material,
            QuickFilter::Correction => request.request_type == RequestType::Correction,
        }
    }
}

impl RequestFilter {
    /// Whether a request passes every dimension of this filter
    pub fn matches(&self, request: &Request, today: NaiveDate) -> bool {
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            if !query.is_empty() {
                let hit = request.id.to_lowercase().contains(&query)
                    || request.factory.to_lowercase().contains(&query)
                    || request.requested_by.name.to_lowercase().contains(&query);
                if !hit {
                    return false;
                }
            }
        }
        if !self.types.is_empty() && !self.types.contains(&request.request_type) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&request.status) {
            return false;
        }
        if !self.priorities.is_empty() && !self.priorities.contains(&request.priority) {
            return false;
        }
        if !self.factories.is_empty() && !self.factories.iter().any(|f| f == &request.factory) {
            return false;
        }
        self.quick.matches(request, today)
    }
}

/// Narrow a request list; the input is left untouched
pub fn filter_requests(
    requests: &[Request],
    filter: &RequestFilter,
    today: NaiveDate,
) -> Vec<Request> {
    requests
        .iter()
        .filter(|r| filter.matches(r, today))
        .cloned()
        .collect()
}

/// Sort keys for the request registry
///
/// Each key names its direction: `DueAsc` puts the earliest due date first.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestSortKey {
    #[default]
    CreatedDesc,
    CreatedAsc,
    PriorityDesc,
    PriorityAsc,
    DueAsc,
    DueDesc,
    FactoryAsc,
    FactoryDesc,
}

/// Stable sort of a request slice by the given key
pub fn sort_requests(requests: &mut [Request], key: RequestSortKey) {
    match key {
        RequestSortKey::CreatedAsc => {
            requests.sort_by(|a, b| a.created_date.cmp(&b.created_date))
        }
        RequestSortKey::CreatedDesc => {
            requests.sort_by(|a, b| b.created_date.cmp(&a.created_date))
        }
        RequestSortKey::PriorityAsc => {
            requests.sort_by(|a, b| a.priority.rank().cmp(&b.priority.rank()))
        }
        RequestSortKey::PriorityDesc => {
            requests.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()))
        }
        RequestSortKey::DueAsc => requests.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
        RequestSortKey::DueDesc => requests.sort_by(|a, b| b.due_date.cmp(&a.due_date)),
        RequestSortKey::FactoryAsc => requests.sort_by(|a, b| a.factory.cmp(&b.factory)),
        RequestSortKey::FactoryDesc => requests.sort_by(|a, b| b.factory.cmp(&a.factory)),
    }
}

/// Predicate bag for narrowing the inventory catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialFilter {
    /// Case-insensitive substring match over name, category, and supplier
    pub search: Option<String>,
    #[serde(default)]
    pub categories: Vec<MaterialCategory>,
    #[serde(default)]
    pub statuses: Vec<StockStatus>,
    #[serde(default)]
    pub suppliers: Vec<String>,
}

impl MaterialFilter {
    pub fn matches(&self, material: &MaterialStock) -> bool {
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            if !query.is_empty() {
                let hit = material.name.to_lowercase().contains(&query)
                    || material.category.to_string().to_lowercase().contains(&query)
                    || material.supplier.to_lowercase().contains(&query);
                if !hit {
                    return false;
                }
            }
        }
        if !self.categories.is_empty() && !self.categories.contains(&material.category) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&material.status()) {
            return false;
        }
        if !self.suppliers.is_empty() && !self.suppliers.iter().any(|s| s == &material.supplier) {
            return false;
        }
        true
    }
}

/// Narrow a material list; the input is left untouched
pub fn filter_materials(materials: &[MaterialStock], filter: &MaterialFilter) -> Vec<MaterialStock> {
    materials
        .iter()
        .filter(|m| filter.matches(m))
        .cloned()
        .collect()
}
