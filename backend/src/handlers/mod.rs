//! HTTP handlers for the HatWorks backend

pub mod batches;
pub mod dashboard;
pub mod inspections;
pub mod materials;
pub mod preferences;
pub mod products;
pub mod requests;

pub use batches::*;
pub use dashboard::*;
pub use inspections::*;
pub use materials::*;
pub use preferences::*;
pub use products::*;
pub use requests::*;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Parse one query token into an enum using its wire (snake_case) name
pub(crate) fn parse_token<T: DeserializeOwned>(token: &str, field: &str) -> AppResult<T> {
    serde_json::from_value(serde_json::Value::String(token.trim().to_string())).map_err(|_| {
        AppError::Validation {
            field: field.to_string(),
            message: format!("Unknown value '{}' for {}", token.trim(), field),
        }
    })
}

/// Parse a comma-separated query parameter into a list of enum values
pub(crate) fn parse_list<T: DeserializeOwned>(
    raw: Option<&str>,
    field: &str,
) -> AppResult<Vec<T>> {
    raw.map(|s| {
        s.split(',')
            .filter(|t| !t.trim().is_empty())
            .map(|t| parse_token(t, field))
            .collect()
    })
    .unwrap_or_else(|| Ok(Vec::new()))
}

/// Split a comma-separated query parameter into plain strings
pub(crate) fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    })
    .unwrap_or_default()
}
