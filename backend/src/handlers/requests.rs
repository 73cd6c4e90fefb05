//! HTTP handlers for the request registry and distribution reconciler

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use shared::{DistributionResult, Request, RequestFilter};

use crate::error::AppResult;
use crate::services::distribution::{DistributeInput, DistributionService, PlanLine};
use crate::services::requests::{BatchApproveOutcome, CreateRequestInput, RequestService};
use crate::AppState;

use super::{parse_list, parse_token, split_list};

/// Query parameters for listing requests; multi-select dimensions are
/// comma-separated
#[derive(Debug, Deserialize)]
pub struct RequestListQuery {
    pub search: Option<String>,
    pub types: Option<String>,
    pub statuses: Option<String>,
    pub priorities: Option<String>,
    pub factories: Option<String>,
    pub quick: Option<String>,
    pub sort: Option<String>,
}

/// Optional response payload for approve/deny
#[derive(Debug, Deserialize, Default)]
pub struct RespondInput {
    pub response_notes: Option<String>,
}

/// Request ids for bulk operations
#[derive(Debug, Deserialize)]
pub struct RequestIdsInput {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CanApproveAllResponse {
    pub can_approve_all: bool,
}

/// List requests matching the query filters
pub async fn list_requests(
    State(state): State<AppState>,
    Query(query): Query<RequestListQuery>,
) -> AppResult<Json<Vec<Request>>> {
    let filter = RequestFilter {
        search: query.search.clone(),
        types: parse_list(query.types.as_deref(), "types")?,
        statuses: parse_list(query.statuses.as_deref(), "statuses")?,
        priorities: parse_list(query.priorities.as_deref(), "priorities")?,
        factories: split_list(query.factories.as_deref()),
        quick: query
            .quick
            .as_deref()
            .map(|t| parse_token(t, "quick"))
            .transpose()?
            .unwrap_or_default(),
    };
    let sort = query
        .sort
        .as_deref()
        .map(|t| parse_token(t, "sort"))
        .transpose()?
        .unwrap_or_default();

    let service = RequestService::new(state.store.clone());
    Ok(Json(service.list(&filter, sort).await))
}

/// Get a single request
pub async fn get_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> AppResult<Json<Request>> {
    let service = RequestService::new(state.store.clone());
    Ok(Json(service.get(&request_id).await?))
}

/// Create a request
pub async fn create_request(
    State(state): State<AppState>,
    Json(input): Json<CreateRequestInput>,
) -> AppResult<Json<Request>> {
    let service = RequestService::new(state.store.clone());
    Ok(Json(service.create(input).await?))
}

/// Approve a pending request
pub async fn approve_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
    body: Option<Json<RespondInput>>,
) -> AppResult<Json<Request>> {
    let notes = body.and_then(|Json(input)| input.response_notes);
    let service = RequestService::new(state.store.clone());
    Ok(Json(service.approve(&request_id, notes).await?))
}

/// Deny a pending request
pub async fn deny_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
    body: Option<Json<RespondInput>>,
) -> AppResult<Json<Request>> {
    let notes = body.and_then(|Json(input)| input.response_notes);
    let service = RequestService::new(state.store.clone());
    Ok(Json(service.deny(&request_id, notes).await?))
}

/// All-or-nothing enablement check for the bulk-approve action
pub async fn can_approve_all(
    State(state): State<AppState>,
    Json(input): Json<RequestIdsInput>,
) -> AppResult<Json<CanApproveAllResponse>> {
    let service = RequestService::new(state.store.clone());
    Ok(Json(CanApproveAllResponse {
        can_approve_all: service.can_approve_all(&input.ids).await,
    }))
}

/// Bulk approve with per-item outcomes
pub async fn approve_all(
    State(state): State<AppState>,
    Json(input): Json<RequestIdsInput>,
) -> AppResult<Json<Vec<BatchApproveOutcome>>> {
    let service = RequestService::new(state.store.clone());
    Ok(Json(service.batch_approve(&input.ids).await))
}

/// Reconciliation view for the distribution modal: the request's lines
/// joined with live catalog stock
pub async fn get_distribution_plan(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> AppResult<Json<Vec<PlanLine>>> {
    let service = DistributionService::new(state.store.clone());
    let plan = service.plan(&request_id).await?;
    Ok(Json(plan.lines().to_vec()))
}

/// Confirm a distribution against the catalog
pub async fn distribute_request(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
    Json(input): Json<DistributeInput>,
) -> AppResult<Json<DistributionResult>> {
    let service = DistributionService::new(state.store.clone());
    Ok(Json(service.distribute(&request_id, input).await?))
}
