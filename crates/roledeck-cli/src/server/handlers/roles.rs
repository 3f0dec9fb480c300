//! Role listing and filtering handlers.

use axum::{Json, extract::State};
use roledeck::{FilterQuery, Record, RoleCard};
use serde::Serialize;

use crate::server::state::AppState;

/// Response for the role endpoints.
#[derive(Serialize)]
pub struct RolesResponse {
    /// Matching roles as display cards, in collection order.
    pub roles: Vec<RoleCard>,
    /// Number of matching roles.
    pub count: usize,
    /// Size of the whole collection.
    pub total: usize,
}

impl RolesResponse {
    fn new<'a>(records: impl IntoIterator<Item = &'a Record>, total: usize) -> Self {
        let roles: Vec<RoleCard> = records.into_iter().map(RoleCard::from).collect();
        Self {
            count: roles.len(),
            roles,
            total,
        }
    }
}

/// List every role.
pub async fn list_roles(State(state): State<AppState>) -> Json<RolesResponse> {
    let catalog = state.catalog.read().await;
    Json(RolesResponse::new(catalog.records(), catalog.len()))
}

/// List roles matching the given facets and search term.
pub async fn filter_roles(
    State(state): State<AppState>,
    Json(query): Json<FilterQuery>,
) -> Json<RolesResponse> {
    let catalog = state.catalog.read().await;
    Json(RolesResponse::new(catalog.query(&query), catalog.len()))
}
