//! HTTP handlers for the analytics date-range preference

use axum::{extract::State, Json};

use shared::DateRangePreference;

use crate::error::AppResult;
use crate::services::preferences::PreferenceService;
use crate::AppState;

/// Read the stored preference, falling back to the default
pub async fn get_date_range(
    State(state): State<AppState>,
) -> AppResult<Json<DateRangePreference>> {
    let service = PreferenceService::new(state.config.preferences.path.clone());
    Ok(Json(service.load().await))
}

/// Store the preference; persistence is best-effort
pub async fn put_date_range(
    State(state): State<AppState>,
    Json(pref): Json<DateRangePreference>,
) -> AppResult<Json<DateRangePreference>> {
    let service = PreferenceService::new(state.config.preferences.path.clone());
    service.save(&pref).await;
    Ok(Json(pref))
}
