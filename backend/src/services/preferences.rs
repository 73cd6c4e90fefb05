//! Analytics date-range preference, persisted best-effort to a local file
//!
//! This is a UI convenience, not durable state: a missing or unreadable
//! file falls back to the default, and write failures are logged and
//! swallowed rather than surfaced.

use std::path::PathBuf;

use chrono::Utc;

use shared::DateRangePreference;

/// Preference service
#[derive(Clone)]
pub struct PreferenceService {
    path: PathBuf,
}

impl PreferenceService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the stored preference, or the default when none is readable
    pub async fn load(&self) -> DateRangePreference {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(pref) => pref,
                Err(err) => {
                    tracing::warn!(path = %self.path.display(), %err, "stored preference unreadable, using default");
                    self.default_preference()
                }
            },
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "no stored preference, using default");
                self.default_preference()
            }
        }
    }

    /// Persist the preference; failures are logged, never returned
    pub async fn save(&self, pref: &DateRangePreference) {
        let bytes = match serde_json::to_vec_pretty(pref) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(%err, "could not serialize preference");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(err) = tokio::fs::create_dir_all(parent).await {
                tracing::warn!(path = %parent.display(), %err, "could not create preference directory");
                return;
            }
        }
        if let Err(err) = tokio::fs::write(&self.path, bytes).await {
            tracing::warn!(path = %self.path.display(), %err, "could not persist preference");
        }
    }

    fn default_preference(&self) -> DateRangePreference {
        DateRangePreference::last_30_days(Utc::now().date_naive())
    }
}
