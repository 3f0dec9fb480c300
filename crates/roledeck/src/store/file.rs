//! Role store backed by a local snapshot file.

use std::path::{Path, PathBuf};

use crate::error::{Result, RoledeckError};
use crate::record::Record;
use crate::snapshot::{load_snapshot, save_snapshot};

use super::provider::RoleStore;

/// Treats a snapshot file as the collection. Every call re-reads the file,
/// and every write rewrites it.
pub struct SnapshotStore {
    path: PathBuf,
    label: String,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Record>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        load_snapshot(&self.path)
    }

    fn write(&self, records: &[Record]) -> Result<()> {
        save_snapshot(&self.path, records).map_err(|e| RoledeckError::Store(e.to_string()))
    }
}

impl RoleStore for SnapshotStore {
    fn name(&self) -> &str {
        &self.label
    }

    fn select_all(&self) -> Result<Vec<Record>> {
        self.load().map_err(|e| RoledeckError::Fetch(e.to_string()))
    }

    fn insert_many(&self, records: &[Record]) -> Result<()> {
        let mut current = self.load()?;
        current.extend_from_slice(records);
        self.write(&current)
    }

    fn update_one(&self, name: &str, record: &Record) -> Result<()> {
        let mut current = self.load()?;
        for existing in current.iter_mut().filter(|r| r.name == name) {
            *existing = record.clone();
        }
        self.write(&current)
    }

    fn delete_one(&self, name: &str) -> Result<()> {
        let mut current = self.load()?;
        current.retain(|r| r.name != name);
        self.write(&current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_snapshot_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("roles.json"));

        assert!(store.select_all().unwrap().is_empty());

        store
            .insert_many(&[Record::new("A"), Record::new("B")])
            .unwrap();
        store
            .update_one("A", &Record::new("A").with_medium("Sound"))
            .unwrap();
        store.delete_one("B").unwrap();

        let records = store.select_all().unwrap();
        assert_eq!(records, vec![Record::new("A").with_medium("Sound")]);
    }

    #[test]
    fn test_malformed_file_is_fetch_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roles.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SnapshotStore::new(&path);
        assert!(matches!(store.select_all(), Err(RoledeckError::Fetch(_))));
    }
}
