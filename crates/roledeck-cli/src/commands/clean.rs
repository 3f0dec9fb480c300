//! Clean command - trim whitespace in the snapshot.

use std::path::Path;

use colored::Colorize;
use roledeck::snapshot::{clean_records, load_snapshot, save_snapshot};

pub fn run(snapshot: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut records = load_snapshot(snapshot)?;
    let report = clean_records(&mut records);
    save_snapshot(snapshot, &records)?;

    println!("Cleaned {} records.", report.records.to_string().white().bold());
    if verbose {
        println!(
            "  {} records changed, {} values trimmed",
            report.records_changed, report.values_trimmed
        );
    }

    Ok(())
}
