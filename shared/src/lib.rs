//! Shared types and models for the HatWorks manufacturing platform
//!
//! This crate contains domain models, pure validation, and the filter/sort
//! engine shared between the backend and other components of the system.

pub mod filter;
pub mod models;
pub mod types;
pub mod validation;

pub use filter::*;
pub use models::*;
pub use types::*;
pub use validation::*;
