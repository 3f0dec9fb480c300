//! Persistence for snapshots - save/load JSON files.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use crate::error::{Result, RoledeckError};
use crate::record::Record;

/// Snapshot file written by `export` and read by `import`.
pub const DEFAULT_SNAPSHOT: &str = "design_roles_data.json";

/// Load a snapshot: a JSON array of role records.
///
/// Anything that is not a well-formed array of records is reported as
/// [`RoledeckError::Snapshot`].
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| RoledeckError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<Record> =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| RoledeckError::Snapshot {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    debug!(path = %path.display(), count = records.len(), "loaded snapshot");
    Ok(records)
}

/// Write a snapshot as pretty-printed JSON (2-space indent).
pub fn save_snapshot(path: impl AsRef<Path>, records: &[Record]) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| RoledeckError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(path = %path.display(), count = records.len(), "saved snapshot");
    Ok(())
}

/// Save with version history.
///
/// If `path` already exists, it is first copied into a `.history` directory
/// next to it, named by the current UTC time. Returns the backup path, if any.
///
/// ```text
/// data/
/// ├── design_roles_data.json
/// └── design_roles_data.history/
///     └── 2024-12-30T10-00-00.json
/// ```
pub fn save_with_history(path: impl AsRef<Path>, records: &[Record]) -> Result<Option<PathBuf>> {
    let path = path.as_ref();

    let backup = if path.exists() {
        let history_dir = history_directory(path);
        fs::create_dir_all(&history_dir).map_err(|source| RoledeckError::Io {
            path: history_dir.clone(),
            source,
        })?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3f");
        let backup = history_dir.join(format!("{}.json", timestamp));
        fs::copy(path, &backup).map_err(|source| RoledeckError::Io {
            path: backup.clone(),
            source,
        })?;
        Some(backup)
    } else {
        None
    };

    save_snapshot(path, records)?;
    Ok(backup)
}

/// List saved versions of a snapshot, newest first.
pub fn list_history(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let history_dir = history_directory(path.as_ref());

    if !history_dir.exists() {
        return Ok(Vec::new());
    }

    let mut entries: Vec<PathBuf> = fs::read_dir(&history_dir)
        .map_err(|source| RoledeckError::Io {
            path: history_dir.clone(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    entries.sort_by(|a, b| b.cmp(a));
    Ok(entries)
}

/// Check that every record has a non-empty name and no name repeats.
pub fn ensure_unique_names(records: &[Record]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(RoledeckError::MissingName { index });
        }
        if !seen.insert(record.name.as_str()) {
            return Err(RoledeckError::DuplicateName {
                name: record.name.clone(),
            });
        }
    }
    Ok(())
}

/// History directory for a snapshot file.
fn history_directory(path: &Path) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let parent = path.parent().unwrap_or(Path::new("."));

    parent.join(format!("{}.history", stem))
}
