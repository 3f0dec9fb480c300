//! Dashboard settings handler.

use axum::Json;
use roledeck::filter::{MIN_SEARCH_CHARS, SEARCH_SETTLE_DELAY};
use serde::Serialize;

/// Client-side timing and thresholds for the dashboard page.
#[derive(Serialize)]
pub struct SettingsResponse {
    /// How long the page waits after the last keystroke before filtering.
    pub search_delay_ms: u64,
    pub min_search_chars: usize,
}

pub async fn get_settings() -> Json<SettingsResponse> {
    Json(SettingsResponse {
        search_delay_ms: SEARCH_SETTLE_DELAY.as_millis() as u64,
        min_search_chars: MIN_SEARCH_CHARS,
    })
}
