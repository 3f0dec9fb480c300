//! Error types for the roledeck library.

use std::path::PathBuf;
use thiserror::Error;

use crate::reconcile::{ApplyPhase, ApplyReport};

/// Main error type for roledeck operations.
#[derive(Debug, Error)]
pub enum RoledeckError {
    /// Error reading or writing a snapshot file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot file is not a well-formed array of role records.
    #[error("Malformed snapshot '{path}': {message}")]
    Snapshot { path: PathBuf, message: String },

    /// Two records in one snapshot share a role name.
    #[error("Duplicate role name in snapshot: '{name}'")]
    DuplicateName { name: String },

    /// A record has an empty role name.
    #[error("Record at position {index} has an empty role name")]
    MissingName { index: usize },

    /// Store configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The remote collection could not be read.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The store rejected a write.
    #[error("Store error: {0}")]
    Store(String),

    /// A reconciliation step failed while being applied.
    #[error("{phase} failed for '{name}': {message} (completed before failure: {completed})")]
    Apply {
        phase: ApplyPhase,
        name: String,
        message: String,
        completed: ApplyReport,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for roledeck operations.
pub type Result<T> = std::result::Result<T, RoledeckError>;
