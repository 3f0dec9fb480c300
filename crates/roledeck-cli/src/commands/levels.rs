//! Levels command - list the org-levels used in the snapshot.

use std::collections::HashSet;
use std::path::Path;

use colored::Colorize;
use roledeck::Record;
use roledeck::snapshot::load_snapshot;

pub fn run(snapshot: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let records = load_snapshot(snapshot)?;
    let levels = distinct_levels(&records);

    let quoted: Vec<String> = levels.iter().map(|level| format!("'{}'", level)).collect();
    println!("{} [{}]", "Unique org-levels:".cyan().bold(), quoted.join(", "));

    Ok(())
}

/// Non-empty org-levels in first-seen order, as written.
fn distinct_levels(records: &[Record]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(|r| r.org_level.as_deref())
        .filter(|level| !level.is_empty() && seen.insert(*level))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_levels_first_seen() {
        let records = vec![
            Record::new("A").with_level("Senior"),
            Record::new("B").with_level("Lead"),
            Record::new("C"),
            Record::new("D").with_level("Senior"),
            Record::new("E").with_level(""),
            Record::new("F").with_level("Senior "),
        ];
        assert_eq!(distinct_levels(&records), vec!["Senior", "Lead", "Senior "]);
    }
}
