//! Role store trait.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::Record;

/// One of the four operations a role store supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreOperation {
    SelectAll,
    Insert,
    Update,
    Delete,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOperation::SelectAll => write!(f, "select"),
            StoreOperation::Insert => write!(f, "insert"),
            StoreOperation::Update => write!(f, "update"),
            StoreOperation::Delete => write!(f, "delete"),
        }
    }
}

/// A collection of role records addressed by role name.
///
/// Reads fail with [`RoledeckError::Fetch`](crate::RoledeckError::Fetch);
/// rejected writes fail with [`RoledeckError::Store`](crate::RoledeckError::Store).
pub trait RoleStore: Send + Sync {
    /// Short name for logs and messages.
    fn name(&self) -> &str;

    /// Fetch every record in the collection.
    fn select_all(&self) -> Result<Vec<Record>>;

    /// Insert records in one call.
    fn insert_many(&self, records: &[Record]) -> Result<()>;

    /// Replace the record named `name` with `record`.
    fn update_one(&self, name: &str, record: &Record) -> Result<()>;

    /// Delete the record named `name`.
    fn delete_one(&self, name: &str) -> Result<()>;
}
