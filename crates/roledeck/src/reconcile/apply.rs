//! Apply a reconciliation plan to a role store.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, RoledeckError};
use crate::store::RoleStore;

use super::plan::ReconcilePlan;

/// Stage of the apply run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyPhase {
    Insert,
    Update,
    Delete,
}

impl fmt::Display for ApplyPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyPhase::Insert => write!(f, "Insert"),
            ApplyPhase::Update => write!(f, "Update"),
            ApplyPhase::Delete => write!(f, "Delete"),
        }
    }
}

/// Counts of store operations that went through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ApplyReport {
    pub inserted: usize,
    pub updated: usize,
    pub deleted: usize,
}

impl fmt::Display for ApplyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} inserted, {} updated, {} deleted",
            self.inserted, self.updated, self.deleted
        )
    }
}

/// Push a plan to the store: one bulk insert, then one update and one delete
/// per record.
///
/// Stops at the first rejected operation. Work done before the failure is
/// not rolled back; the error carries the counts of what did go through.
pub fn apply_plan(store: &dyn RoleStore, plan: &ReconcilePlan) -> Result<ApplyReport> {
    let mut report = ApplyReport::default();

    if !plan.to_insert.is_empty() {
        info!(count = plan.to_insert.len(), store = store.name(), "inserting records");
        store.insert_many(&plan.to_insert).map_err(|e| {
            let name = plan
                .to_insert
                .iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            failure(ApplyPhase::Insert, name, e, report)
        })?;
        report.inserted = plan.to_insert.len();
    }

    if !plan.to_update.is_empty() {
        info!(count = plan.to_update.len(), store = store.name(), "updating records");
        for record in &plan.to_update {
            debug!(name = %record.name, "update");
            store
                .update_one(&record.name, record)
                .map_err(|e| failure(ApplyPhase::Update, record.name.clone(), e, report))?;
            report.updated += 1;
        }
    }

    if !plan.to_delete.is_empty() {
        info!(count = plan.to_delete.len(), store = store.name(), "deleting orphaned records");
        for record in &plan.to_delete {
            debug!(name = %record.name, "delete");
            store
                .delete_one(&record.name)
                .map_err(|e| failure(ApplyPhase::Delete, record.name.clone(), e, report))?;
            report.deleted += 1;
        }
    }

    Ok(report)
}

fn failure(
    phase: ApplyPhase,
    name: String,
    error: RoledeckError,
    completed: ApplyReport,
) -> RoledeckError {
    let message = match error {
        RoledeckError::Store(message) | RoledeckError::Fetch(message) => message,
        other => other.to_string(),
    };
    RoledeckError::Apply {
        phase,
        name,
        message,
        completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::reconcile::reconcile;
    use crate::store::{MemoryStore, StoreOperation};

    #[test]
    fn test_apply_full_plan() {
        let store = MemoryStore::with_records(vec![
            Record::new("Keep"),
            Record::new("Change").with_level("L1"),
            Record::new("Orphan"),
        ]);
        let local = vec![
            Record::new("Keep"),
            Record::new("Change").with_level("L2"),
            Record::new("New"),
        ];

        let remote = store.records();
        let plan = reconcile(&local, &remote, true);
        let report = apply_plan(&store, &plan).unwrap();

        assert_eq!(
            report,
            ApplyReport {
                inserted: 1,
                updated: 1,
                deleted: 1
            }
        );
        let names: Vec<_> = store.records().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Keep", "Change", "New"]);
        assert_eq!(reconcile(&local, &store.records(), true).total_changes(), 0);
    }

    #[test]
    fn test_apply_stops_at_first_update_failure() {
        let store = MemoryStore::with_records(vec![
            Record::new("A").with_level("old"),
            Record::new("B").with_level("old"),
            Record::new("C").with_level("old"),
            Record::new("Orphan"),
        ]);
        store.fail_on(StoreOperation::Update, "B", "permission denied");

        let local = vec![
            Record::new("A").with_level("new"),
            Record::new("B").with_level("new"),
            Record::new("C").with_level("new"),
        ];
        let plan = reconcile(&local, &store.records(), true);

        let err = apply_plan(&store, &plan).unwrap_err();
        match err {
            RoledeckError::Apply {
                phase,
                name,
                message,
                completed,
            } => {
                assert_eq!(phase, ApplyPhase::Update);
                assert_eq!(name, "B");
                assert_eq!(message, "permission denied");
                assert_eq!(completed.updated, 1);
            }
            other => panic!("unexpected error: {other}"),
        }

        // A was applied, C and the orphan delete were not.
        let records = store.records();
        assert_eq!(records[0].org_level.as_deref(), Some("new"));
        assert_eq!(records[2].org_level.as_deref(), Some("old"));
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn test_insert_failure_reports_batch() {
        let store = MemoryStore::new();
        store.fail_on(StoreOperation::Insert, "*", "row-level security");

        let plan = reconcile(&[Record::new("X"), Record::new("Y")], &[], false);
        let err = apply_plan(&store, &plan).unwrap_err();
        assert!(err.to_string().contains("Insert failed for 'X, Y'"));
        assert!(store.records().is_empty());
    }
}
