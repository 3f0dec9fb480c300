//! Export command - fetch the remote table into a snapshot file.

use std::path::{Path, PathBuf};

use colored::Colorize;
use roledeck::snapshot::save_with_history;
use roledeck::store::{RoleStore, SupabaseStore};

pub fn run(
    snapshot: &Path,
    output: Option<PathBuf>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output.unwrap_or_else(|| snapshot.to_path_buf());
    let store = SupabaseStore::from_env()?;

    println!("{} {}...", "Fetching roles from".cyan(), store.name().white().bold());
    let records = store.select_all()?;
    println!("Fetched {} records", records.len().to_string().white().bold());

    let backup = save_with_history(&output, &records)?;
    if verbose {
        if let Some(backup) = backup {
            println!("  Previous snapshot kept at {}", backup.display());
        }
    }

    println!();
    println!(
        "{} {}",
        "Exported to".green().bold(),
        output.display().to_string().white()
    );
    println!("Total records: {}", records.len());

    Ok(())
}
