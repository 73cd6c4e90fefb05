//! Common types used across the platform

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date range for queries and reports
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range is valid when the end falls strictly after the start
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Persisted analytics date-range preference
///
/// Stored as a single opaque JSON blob on the device; reads and writes are
/// best-effort and never block the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRangePreference {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl DateRangePreference {
    /// Default preference: the last 30 days ending today
    pub fn last_30_days(today: NaiveDate) -> Self {
        Self {
            start: today - chrono::Duration::days(30),
            end: today,
            label: "30d".to_string(),
        }
    }
}
