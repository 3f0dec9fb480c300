//! In-memory role store for tests and offline runs.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::error::{Result, RoledeckError};
use crate::record::{Column, Record};

use super::provider::{RoleStore, StoreOperation};

/// Name that makes an injected failure match every record.
const ANY_NAME: &str = "*";

#[derive(Default)]
struct Inner {
    records: Vec<Record>,
    next_id: u64,
    failures: HashMap<(StoreOperation, String), String>,
}

/// Role store backed by a `Vec`, with optional injected failures.
///
/// Inserted records without an `id` get the next integer id, like a serial
/// primary key would.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records`.
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records
            .iter()
            .filter_map(|r| r.id.as_ref().and_then(Value::as_u64))
            .max()
            .unwrap_or(0);

        Self {
            inner: Mutex::new(Inner {
                records,
                next_id,
                failures: HashMap::new(),
            }),
        }
    }

    /// Make `operation` on `name` fail with `message`. Use `"*"` to match any name.
    pub fn fail_on(&self, operation: StoreOperation, name: &str, message: &str) {
        self.lock()
            .failures
            .insert((operation, name.to_string()), message.to_string());
    }

    /// Remove all injected failures.
    pub fn clear_failures(&self) {
        self.lock().failures.clear();
    }

    /// Copy of the current contents.
    pub fn records(&self) -> Vec<Record> {
        self.lock().records.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Write the columns `update` carries onto `existing`, like a PATCH would.
fn patch(existing: &mut Record, update: &Record) {
    existing.name = update.name.clone();
    if let Some(id) = &update.id {
        existing.id = Some(id.clone());
    }
    for column in Column::ALL.into_iter().filter(|&c| update.carries(c)) {
        existing.set(column, update.get(column).map(str::to_string));
    }
    for (key, value) in &update.extra {
        existing.extra.insert(key.clone(), value.clone());
    }
}

impl Inner {
    fn check(&self, operation: StoreOperation, name: &str) -> Option<String> {
        self.failures
            .get(&(operation, name.to_string()))
            .or_else(|| self.failures.get(&(operation, ANY_NAME.to_string())))
            .cloned()
    }
}

impl RoleStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn select_all(&self) -> Result<Vec<Record>> {
        let inner = self.lock();
        if let Some(message) = inner.check(StoreOperation::SelectAll, ANY_NAME) {
            return Err(RoledeckError::Fetch(message));
        }
        Ok(inner.records.clone())
    }

    fn insert_many(&self, records: &[Record]) -> Result<()> {
        let mut inner = self.lock();
        for record in records {
            if let Some(message) = inner.check(StoreOperation::Insert, &record.name) {
                return Err(RoledeckError::Store(message));
            }
        }

        for record in records {
            let mut record = record.clone();
            if record.id.is_none() {
                inner.next_id += 1;
                record.id = Some(Value::from(inner.next_id));
            }
            inner.records.push(record);
        }
        Ok(())
    }

    fn update_one(&self, name: &str, record: &Record) -> Result<()> {
        let mut inner = self.lock();
        if let Some(message) = inner.check(StoreOperation::Update, name) {
            return Err(RoledeckError::Store(message));
        }

        for existing in inner.records.iter_mut().filter(|r| r.name == name) {
            patch(existing, record);
        }
        Ok(())
    }

    fn delete_one(&self, name: &str) -> Result<()> {
        let mut inner = self.lock();
        if let Some(message) = inner.check(StoreOperation::Delete, name) {
            return Err(RoledeckError::Store(message));
        }

        inner.records.retain(|r| r.name != name);
        Ok(())
    }
}
