//! Facet and reload handlers.

use axum::{Json, extract::State};
use roledeck::Facets;
use serde::Serialize;
use tracing::info;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Get the facet values for the filter controls.
pub async fn get_facets(State(state): State<AppState>) -> Json<Facets> {
    let catalog = state.catalog.read().await;
    Json(catalog.facets().clone())
}

/// Response for the reload endpoint.
#[derive(Serialize)]
pub struct ReloadResponse {
    pub count: usize,
}

/// Refresh the cached collection from its store.
pub async fn reload(State(state): State<AppState>) -> Result<Json<ReloadResponse>, ApiError> {
    let count = state.reload().await?;
    info!(count, "catalog reloaded");
    Ok(Json(ReloadResponse { count }))
}
