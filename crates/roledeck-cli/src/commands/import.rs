//! Import command - push snapshot changes to the remote table.

use std::collections::HashSet;
use std::path::Path;

use colored::Colorize;
use roledeck::reconcile::{ReconcilePlan, apply_plan, reconcile};
use roledeck::snapshot::{ensure_unique_names, load_snapshot};
use roledeck::store::{KeyKind, RoleStore, SupabaseStore};
use roledeck::{Record, RoledeckError};
use tracing::warn;

pub fn run(
    snapshot: &Path,
    dry_run: bool,
    delete_orphans: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = SupabaseStore::from_env()?;
    if store.config().key_kind == KeyKind::Anon {
        println!(
            "{} SUPABASE_SERVICE_ROLE_KEY not found, using the anon key.",
            "Warning:".yellow().bold()
        );
        println!("  Import might fail if row-level security blocks anonymous writes.");
        println!();
    }

    println!("{}", "Starting import...".cyan().bold());
    if dry_run {
        println!("{}", "DRY RUN - no changes will be made".yellow().bold());
    }
    println!();

    let local = load_snapshot(snapshot)?;
    ensure_unique_names(&local)?;
    println!(
        "Read {} records from {}",
        local.len().to_string().white().bold(),
        snapshot.display()
    );

    println!("Fetching existing roles from {}...", store.name());
    let remote = store.select_all()?;
    println!(
        "Found {} existing records in the table",
        remote.len().to_string().white().bold()
    );
    for name in repeated_names(&remote) {
        warn!(%name, "role name appears more than once in the table; only the first row is compared");
    }
    println!();

    let plan = reconcile(&local, &remote, delete_orphans);
    print_summary(&plan, verbose);

    if dry_run {
        println!("{}", "Dry run complete. No changes were made.".green().bold());
        println!("Run without --dry-run to apply these changes.");
        return Ok(());
    }

    if plan.is_empty() {
        println!("{}", "Nothing to apply.".green().bold());
        return Ok(());
    }

    println!("{}", "Applying changes...".cyan().bold());
    match apply_plan(&store, &plan) {
        Ok(report) => {
            println!();
            println!("{}", "Import completed successfully!".green().bold());
            println!("Summary: {}", report);
            Ok(())
        }
        Err(e) => {
            if let RoledeckError::Apply { completed, .. } = &e {
                println!();
                println!("{} {}", "Applied before the failure:".yellow().bold(), completed);
            }
            Err(format!("Import failed: {}", e).into())
        }
    }
}

fn print_summary(plan: &ReconcilePlan, verbose: bool) {
    let rule = "─".repeat(50);

    println!("{}", "CHANGE SUMMARY".cyan().bold());
    println!("{}", rule);
    println!("  Unchanged:     {}", plan.unchanged);
    println!("  To insert:     {}", plan.to_insert.len().to_string().green());
    println!("  To update:     {}", plan.to_update.len().to_string().yellow());
    println!("  To delete:     {}", plan.to_delete.len().to_string().red());
    println!("{}", rule);
    println!("  Total changes: {}", plan.total_changes().to_string().white().bold());
    println!();

    print_names("New roles to insert:", &plan.to_insert);
    print_names("Roles to update:", &plan.to_update);
    print_names("Roles to delete:", &plan.to_delete);

    if verbose && plan.to_delete.is_empty() && !plan.is_empty() {
        println!("Remote roles missing from the snapshot are kept (pass --delete-orphans to remove them).");
        println!();
    }
}

fn print_names(heading: &str, records: &[Record]) {
    if records.is_empty() {
        return;
    }
    println!("{}", heading.bold());
    for record in records {
        println!("   - {}", record.name);
    }
    println!();
}

/// Names that occur more than once, each reported once.
fn repeated_names(records: &[Record]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    records
        .iter()
        .map(|r| r.name.as_str())
        .filter(|name| !seen.insert(*name) && reported.insert(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_names() {
        let records = vec![
            Record::new("A"),
            Record::new("B"),
            Record::new("A"),
            Record::new("A"),
            Record::new("C"),
        ];
        assert_eq!(repeated_names(&records), vec!["A"]);
    }
}
