//! Role-specific dashboard layout

use serde::{Deserialize, Serialize};

/// Roles that get a dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DashboardRole {
    Admin,
    Lead,
    Qc,
    Staff,
    Courier,
}

/// Closed set of chart kinds; rendering dispatches on this tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Area,
    Bar,
    Donut,
    Pie,
    Line,
}

/// Data sources a chart can be fed from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChartSource {
    RequestVolume,
    RequestStatusBreakdown,
    FactoryCompletion,
    InspectionOutcomes,
    DefectSeverity,
    StockLevels,
    DeliverySchedule,
}

/// One chart slot on a dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub source: ChartSource,
}

impl ChartSpec {
    const fn new(kind: ChartKind, source: ChartSource) -> Self {
        Self { kind, source }
    }
}

/// Ordered chart layout for a role
///
/// Pure mapping; the UI renders the returned list top to bottom with one
/// rendering function per chart kind.
pub fn dashboard_layout(role: DashboardRole) -> Vec<ChartSpec> {
    match role {
        DashboardRole::Admin => vec![
            ChartSpec::new(ChartKind::Area, ChartSource::RequestVolume),
            ChartSpec::new(ChartKind::Donut, ChartSource::RequestStatusBreakdown),
            ChartSpec::new(ChartKind::Bar, ChartSource::FactoryCompletion),
            ChartSpec::new(ChartKind::Line, ChartSource::StockLevels),
        ],
        DashboardRole::Lead => vec![
            ChartSpec::new(ChartKind::Bar, ChartSource::FactoryCompletion),
            ChartSpec::new(ChartKind::Area, ChartSource::RequestVolume),
            ChartSpec::new(ChartKind::Pie, ChartSource::RequestStatusBreakdown),
        ],
        DashboardRole::Qc => vec![
            ChartSpec::new(ChartKind::Donut, ChartSource::InspectionOutcomes),
            ChartSpec::new(ChartKind::Bar, ChartSource::DefectSeverity),
        ],
        DashboardRole::Staff => vec![
            ChartSpec::new(ChartKind::Pie, ChartSource::RequestStatusBreakdown),
            ChartSpec::new(ChartKind::Line, ChartSource::StockLevels),
        ],
        DashboardRole::Courier => vec![
            ChartSpec::new(ChartKind::Bar, ChartSource::DeliverySchedule),
        ],
    }
}
