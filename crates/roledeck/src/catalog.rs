//! Cached copy of the full role collection.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::error::Result;
use crate::filter::{Facets, FilterQuery, derive_facets};
use crate::record::Record;
use crate::store::RoleStore;

/// The collection as last loaded, plus the facets derived from it.
///
/// The cache only changes through [`RoleCatalog::reload`] or
/// [`RoleCatalog::replace`]; readers get a shared, immutable slice.
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    records: Arc<[Record]>,
    facets: Facets,
    loaded_at: Option<DateTime<Utc>>,
}

impl RoleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from records already in hand.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut catalog = Self::new();
        catalog.replace(records);
        catalog
    }

    /// Load the whole collection from `store`.
    pub fn load(store: &dyn RoleStore) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.reload(store)?;
        Ok(catalog)
    }

    /// Replace the cache with a fresh read of `store`. Returns the record count.
    ///
    /// On error the previous contents are kept.
    pub fn reload(&mut self, store: &dyn RoleStore) -> Result<usize> {
        let records = store.select_all()?;
        info!(store = store.name(), count = records.len(), "role catalog loaded");
        self.replace(records);
        Ok(self.records.len())
    }

    /// Replace the cache with `records`.
    pub fn replace(&mut self, records: Vec<Record>) {
        self.facets = derive_facets(&records);
        self.records = records.into();
        self.loaded_at = Some(Utc::now());
    }

    /// Shared handle to the cached records.
    pub fn snapshot(&self) -> Arc<[Record]> {
        Arc::clone(&self.records)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run a query against the cache.
    pub fn query(&self, query: &FilterQuery) -> Vec<&Record> {
        query.apply(&self.records)
    }
}
