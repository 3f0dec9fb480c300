//! Diff a local snapshot against the remote collection.

use std::collections::HashMap;

use serde::Serialize;

use crate::record::Record;

/// Classification of a local snapshot against a remote collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReconcilePlan {
    /// Local records with no remote counterpart, in local order.
    pub to_insert: Vec<Record>,
    /// Local records whose content differs from the remote, in local order.
    pub to_update: Vec<Record>,
    /// Remote-only records, in remote order. Empty unless orphans were requested.
    pub to_delete: Vec<Record>,
    /// Local records identical to their remote counterpart.
    pub unchanged: usize,
}

impl ReconcilePlan {
    /// Total number of store operations the plan implies.
    pub fn total_changes(&self) -> usize {
        self.to_insert.len() + self.to_update.len() + self.to_delete.len()
    }

    /// True when applying the plan would not touch the store.
    pub fn is_empty(&self) -> bool {
        self.total_changes() == 0
    }
}

/// Compute which local records to insert or update, and which remote records
/// are orphaned.
///
/// Records are matched by role name. When `remote` repeats a name, only the
/// first occurrence takes part; later ones are neither matched nor orphaned.
pub fn reconcile(local: &[Record], remote: &[Record], include_orphans: bool) -> ReconcilePlan {
    let mut lookup: HashMap<&str, usize> = HashMap::with_capacity(remote.len());
    for (index, record) in remote.iter().enumerate() {
        lookup.entry(record.name.as_str()).or_insert(index);
    }

    let mut plan = ReconcilePlan::default();

    for record in local {
        match lookup.remove(record.name.as_str()) {
            None => plan.to_insert.push(record.clone()),
            Some(index) => {
                if record.differs_from(&remote[index]) {
                    plan.to_update.push(record.clone());
                } else {
                    plan.unchanged += 1;
                }
            }
        }
    }

    if include_orphans {
        plan.to_delete = remote
            .iter()
            .enumerate()
            .filter(|(index, record)| lookup.get(record.name.as_str()) == Some(index))
            .map(|(_, record)| record.clone())
            .collect();
    }

    plan
}
