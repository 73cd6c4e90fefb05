//! Material distribution reconciler
//!
//! Reconciles a pending material request against live catalog stock. The
//! operator builds a `DistributionPlan` by selecting lines and quantities;
//! confirmation produces a `DistributionResult`, decrements the catalog,
//! and resolves the originating request — all under one write lock.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::{DistributionResult, MaterialLineItem, Request, RequestStatus, RequestType};

use crate::error::{AppError, AppResult};
use crate::store::Store;

/// Distribution service
#[derive(Clone)]
pub struct DistributionService {
    store: Store,
}

/// Operator selections submitted with a confirm call
#[derive(Debug, Deserialize)]
pub struct DistributeInput {
    pub lines: Vec<DistributionLineInput>,
}

#[derive(Debug, Deserialize)]
pub struct DistributionLineInput {
    pub material_id: Uuid,
    pub quantity: u32,
}

/// One request line joined with live catalog stock
#[derive(Debug, Clone, Serialize)]
pub struct PlanLine {
    pub material_id: Uuid,
    pub material_name: String,
    pub unit: String,
    pub requested_qty: u32,
    /// Catalog stock at plan creation
    pub available_stock: u32,
    /// Catalog price at plan creation
    pub unit_price: Decimal,
    pub selected_qty: Option<u32>,
}

impl PlanLine {
    /// Upper bound for a selection: never above the requested amount and
    /// never above what the catalog holds
    pub fn limit(&self) -> u32 {
        self.requested_qty.min(self.available_stock)
    }
}

/// In-progress reconciliation of one request against the catalog
///
/// Pure over its snapshots; dropping the plan discards the selection with
/// no side effects.
#[derive(Debug, Clone)]
pub struct DistributionPlan {
    request_id: String,
    lines: Vec<PlanLine>,
}

impl DistributionPlan {
    /// Build a plan for a pending material request against the catalog
    pub fn new(
        request: &Request,
        stock_of: impl Fn(Uuid) -> Option<(u32, Decimal)>,
    ) -> AppResult<Self> {
        if request.request_type != RequestType::Material {
            return Err(AppError::Validation {
                field: "request_type".to_string(),
                message: format!("Request {} is not a material request", request.id),
            });
        }
        if request.status != RequestStatus::Pending {
            return Err(AppError::InvalidStateTransition(format!(
                "Request {} is already {}",
                request.id, request.status
            )));
        }

        let lines = request
            .materials
            .iter()
            .map(|line| {
                // Fall back to the snapshot on the line if the catalog
                // record has vanished
                let (available_stock, unit_price) = stock_of(line.material_id)
                    .unwrap_or((line.current_stock, line.unit_price));
                PlanLine {
                    material_id: line.material_id,
                    material_name: line.material_name.clone(),
                    unit: line.unit.clone(),
                    requested_qty: line.requested_qty,
                    available_stock,
                    unit_price,
                    selected_qty: None,
                }
            })
            .collect();

        Ok(Self {
            request_id: request.id.clone(),
            lines,
        })
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn lines(&self) -> &[PlanLine] {
        &self.lines
    }

    /// Select (with a default quantity of 1) or deselect a line
    pub fn toggle(&mut self, material_id: Uuid) -> AppResult<()> {
        let line = self.line_mut(material_id)?;
        if line.selected_qty.is_some() {
            line.selected_qty = None;
        } else {
            if line.limit() == 0 {
                return Err(AppError::InsufficientInventory(format!(
                    "{} is out of stock",
                    line.material_name
                )));
            }
            line.selected_qty = Some(1);
        }
        Ok(())
    }

    /// Set a typed quantity on a selected line
    ///
    /// Out-of-range values are rejected and the last valid value kept.
    pub fn set_quantity(&mut self, material_id: Uuid, quantity: u32) -> AppResult<()> {
        let line = self.line_mut(material_id)?;
        if line.selected_qty.is_none() {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: "Select the material before setting a quantity".to_string(),
            });
        }
        if quantity < 1 || quantity > line.limit() {
            return Err(AppError::Validation {
                field: "quantity".to_string(),
                message: format!(
                    "Quantity must be between 1 and {} for {}",
                    line.limit(),
                    line.material_name
                ),
            });
        }
        line.selected_qty = Some(quantity);
        Ok(())
    }

    /// Step a selected quantity up, clamped at the line limit
    pub fn increment(&mut self, material_id: Uuid) -> AppResult<()> {
        let line = self.line_mut(material_id)?;
        if let Some(qty) = line.selected_qty {
            line.selected_qty = Some((qty + 1).min(line.limit()));
        }
        Ok(())
    }

    /// Step a selected quantity down, clamped at 1
    pub fn decrement(&mut self, material_id: Uuid) -> AppResult<()> {
        let line = self.line_mut(material_id)?;
        if let Some(qty) = line.selected_qty {
            line.selected_qty = Some(qty.saturating_sub(1).max(1));
        }
        Ok(())
    }

    pub fn selected_count(&self) -> usize {
        self.lines.iter().filter(|l| l.selected_qty.is_some()).count()
    }

    /// Distinct materials selected vs. requested, in percent
    pub fn material_coverage_percent(&self) -> u32 {
        if self.lines.is_empty() {
            return 0;
        }
        let ratio = self.selected_count() as f64 / self.lines.len() as f64;
        (ratio * 100.0).round() as u32
    }

    /// Selected quantity vs. requested quantity across all lines, in percent
    pub fn quantity_fulfillment_percent(&self) -> u32 {
        let requested: u64 = self.lines.iter().map(|l| l.requested_qty as u64).sum();
        if requested == 0 {
            return 0;
        }
        let selected: u64 = self
            .lines
            .iter()
            .filter_map(|l| l.selected_qty)
            .map(u64::from)
            .sum();
        ((selected as f64 / requested as f64) * 100.0).round() as u32
    }

    /// Total cost of the current selection
    pub fn total_cost(&self) -> Decimal {
        self.lines
            .iter()
            .filter_map(|l| l.selected_qty.map(|qty| Decimal::from(qty) * l.unit_price))
            .sum()
    }

    /// Finalize the plan into a result; rejects an empty selection
    pub fn build_result(&self, distributed_at: DateTime<Utc>) -> AppResult<DistributionResult> {
        if self.selected_count() == 0 {
            return Err(AppError::Validation {
                field: "lines".to_string(),
                message: "Select at least one material to distribute".to_string(),
            });
        }

        let lines = self
            .lines
            .iter()
            .filter_map(|l| {
                l.selected_qty.map(|qty| MaterialLineItem {
                    material_id: l.material_id,
                    material_name: l.material_name.clone(),
                    requested_qty: l.requested_qty,
                    approved_qty: qty,
                    unit: l.unit.clone(),
                    current_stock: l.available_stock,
                    unit_price: l.unit_price,
                })
            })
            .collect();

        Ok(DistributionResult {
            request_id: self.request_id.clone(),
            lines,
            material_coverage_percent: self.material_coverage_percent(),
            quantity_fulfillment_percent: self.quantity_fulfillment_percent(),
            total_cost: self.total_cost(),
            distributed_at,
        })
    }

    fn line_mut(&mut self, material_id: Uuid) -> AppResult<&mut PlanLine> {
        self.lines
            .iter_mut()
            .find(|l| l.material_id == material_id)
            .ok_or_else(|| AppError::NotFound("Material line".to_string()))
    }
}

impl DistributionService {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Build a plan for a request against live catalog stock
    pub async fn plan(&self, request_id: &str) -> AppResult<DistributionPlan> {
        let store = self.store.read().await;
        let request = store
            .requests
            .get(request_id)
            .ok_or_else(|| AppError::NotFound("Request".to_string()))?;
        DistributionPlan::new(request, |id| {
            store
                .materials
                .get(&id)
                .map(|m| (m.quantity, m.cost_per_unit))
        })
    }

    /// Plan, apply the submitted selections, and confirm in one call
    pub async fn distribute(
        &self,
        request_id: &str,
        input: DistributeInput,
    ) -> AppResult<DistributionResult> {
        let mut plan = self.plan(request_id).await?;
        for line in &input.lines {
            plan.toggle(line.material_id)?;
            plan.set_quantity(line.material_id, line.quantity)?;
        }
        self.confirm(&plan).await
    }

    /// Confirm a plan: decrement catalog stock, write approved quantities
    /// onto the request, and resolve it — atomically
    pub async fn confirm(&self, plan: &DistributionPlan) -> AppResult<DistributionResult> {
        let result = plan.build_result(Utc::now())?;

        let mut store = self.store.write().await;

        let request = store
            .requests
            .get(plan.request_id())
            .ok_or_else(|| AppError::NotFound("Request".to_string()))?;
        if request.status != RequestStatus::Pending {
            return Err(AppError::InvalidStateTransition(format!(
                "Request {} is already {}",
                request.id, request.status
            )));
        }

        // Check the whole selection against live stock before touching
        // anything, so a late failure cannot leave a partial decrement
        for line in &result.lines {
            let material = store
                .materials
                .get(&line.material_id)
                .ok_or_else(|| AppError::NotFound("Material".to_string()))?;
            if material.quantity < line.approved_qty {
                return Err(AppError::InsufficientInventory(format!(
                    "Only {} {} of {} left in stock",
                    material.quantity, material.unit, material.name
                )));
            }
        }

        for line in &result.lines {
            if let Some(material) = store.materials.get_mut(&line.material_id) {
                material.quantity -= line.approved_qty;
                material.last_updated = result.distributed_at;
                material.version += 1;
            }
        }

        let request = store
            .requests
            .get_mut(plan.request_id())
            .ok_or_else(|| AppError::NotFound("Request".to_string()))?;
        for request_line in &mut request.materials {
            request_line.approved_qty = result
                .lines
                .iter()
                .find(|l| l.material_id == request_line.material_id)
                .map(|l| l.approved_qty)
                .unwrap_or(0);
        }
        request.status = RequestStatus::Approved;
        request.responded_date = Some(result.distributed_at);

        tracing::info!(
            id = %result.request_id,
            coverage = result.material_coverage_percent,
            fulfillment = result.quantity_fulfillment_percent,
            "distribution confirmed"
        );

        Ok(result)
    }
}
