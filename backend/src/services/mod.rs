//! Business logic services for the HatWorks backend

pub mod batches;
pub mod dashboard;
pub mod distribution;
pub mod inspections;
pub mod inventory;
pub mod preferences;
pub mod products;
pub mod requests;

pub use batches::BatchService;
pub use dashboard::DashboardService;
pub use distribution::DistributionService;
pub use inspections::InspectionService;
pub use inventory::InventoryService;
pub use preferences::PreferenceService;
pub use products::ProductService;
pub use requests::RequestService;
