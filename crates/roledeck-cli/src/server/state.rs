//! Application state for the web server.

use std::sync::Arc;
use tokio::sync::RwLock;

use roledeck::{RoleCatalog, RoleStore};

use super::error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Cached role collection and its facets.
    pub catalog: Arc<RwLock<RoleCatalog>>,
    /// Where the catalog is (re)loaded from.
    pub store: Arc<dyn RoleStore>,
}

impl AppState {
    /// Create new application state around an already loaded catalog.
    pub fn new(catalog: RoleCatalog, store: Arc<dyn RoleStore>) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            store,
        }
    }

    /// Re-read the store and swap the cache. Returns the new record count.
    ///
    /// The store client blocks, so the read runs off the async workers.
    pub async fn reload(&self) -> Result<usize, ApiError> {
        let store = Arc::clone(&self.store);
        let records = tokio::task::spawn_blocking(move || store.select_all())
            .await
            .map_err(|e| ApiError::Internal(format!("Reload task failed: {}", e)))??;

        let mut catalog = self.catalog.write().await;
        catalog.replace(records);
        Ok(catalog.len())
    }
}
