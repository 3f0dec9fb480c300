//! Whitespace cleanup for snapshot records.

use serde::Serialize;
use serde_json::Value;

use crate::record::Record;

/// Summary of a cleaning pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    /// Records looked at.
    pub records: usize,
    /// Records with at least one trimmed value.
    pub records_changed: usize,
    /// Individual string values that were trimmed.
    pub values_trimmed: usize,
}

/// Trim leading and trailing whitespace from every top-level string value.
///
/// Covers the typed columns and string-valued untyped columns. Nested
/// arrays and objects are left as they are.
pub fn clean_records(records: &mut [Record]) -> CleanReport {
    let mut report = CleanReport {
        records: records.len(),
        ..CleanReport::default()
    };

    for record in records.iter_mut() {
        let mut trimmed = 0;

        trimmed += usize::from(trim_string(&mut record.name));
        for field in [
            &mut record.description,
            &mut record.responsibilities,
            &mut record.skills,
            &mut record.industry,
            &mut record.org_level,
            &mut record.medium,
        ] {
            if let Some(value) = field {
                trimmed += usize::from(trim_string(value));
            }
        }
        if let Some(Value::String(id)) = &mut record.id {
            trimmed += usize::from(trim_string(id));
        }
        for value in record.extra.values_mut() {
            if let Value::String(text) = value {
                trimmed += usize::from(trim_string(text));
            }
        }

        if trimmed > 0 {
            report.records_changed += 1;
            report.values_trimmed += trimmed;
        }
    }

    report
}

/// Trim in place; returns whether anything changed.
fn trim_string(value: &mut String) -> bool {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        return false;
    }
    *value = trimmed.to_string();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_trims_all_string_fields() {
        let mut records = vec![
            Record::new(" Motion Designer ")
                .with_level("Senior\n")
                .with_field("notes", "  keep inner  spaces ")
                .with_field("tags", json!([" a "])),
            Record::new("Clean").with_medium("Digital"),
        ];

        let report = clean_records(&mut records);

        assert_eq!(
            report,
            CleanReport {
                records: 2,
                records_changed: 1,
                values_trimmed: 3
            }
        );
        assert_eq!(records[0].name, "Motion Designer");
        assert_eq!(records[0].org_level.as_deref(), Some("Senior"));
        assert_eq!(records[0].extra["notes"], json!("keep inner  spaces"));
        assert_eq!(records[0].extra["tags"], json!([" a "]));
    }

    #[test]
    fn test_clean_is_idempotent() {
        let mut records = vec![Record::new(" A ").with_industry(" Tech, Retail ")];
        clean_records(&mut records);
        let second = clean_records(&mut records);
        assert_eq!(second.values_trimmed, 0);
    }
}
