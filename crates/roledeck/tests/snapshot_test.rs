//! Integration tests for snapshot files.

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use roledeck::snapshot::{clean_records, list_history, load_snapshot, save_snapshot, save_with_history};
use roledeck::{Record, RoledeckError};

fn sample() -> Vec<Record> {
    vec![
        Record::new("Service Designer")
            .with_id(3)
            .with_industry("Government, Health")
            .with_level("Senior")
            .with_field("created_at", "2024-03-01T10:00:00Z"),
        Record::new("Type Designer").with_medium("Physical"),
    ]
}

#[test]
fn test_save_then_load_keeps_unknown_columns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("design_roles_data.json");

    save_snapshot(&path, &sample()).unwrap();
    let loaded = load_snapshot(&path).unwrap();

    assert_eq!(loaded, sample());
    assert_eq!(loaded[0].extra["created_at"], json!("2024-03-01T10:00:00Z"));
}

#[test]
fn test_snapshot_is_pretty_printed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roles.json");

    save_snapshot(&path, &[Record::new("Type Designer")]).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.starts_with("[\n  {\n    \"role-name\": \"Type Designer\""), "{text}");
    assert!(text.ends_with("]\n"));
}

#[test]
fn test_sparse_snapshot_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roles.json");

    let original = "[\n  {\n    \"role-name\": \"A\",\n    \"org-level\": \"L1\"\n  },\n  {\n    \"id\": 2,\n    \"role-name\": \"B\",\n    \"description\": null,\n    \"created_at\": \"t\"\n  }\n]\n";
    fs::write(&path, original).unwrap();

    let records = load_snapshot(&path).unwrap();
    save_snapshot(&path, &records).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_clean_adds_no_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roles.json");
    fs::write(&path, r#"[{"role-name": " A ", "medium": "Sound"}]"#).unwrap();

    let mut records = load_snapshot(&path).unwrap();
    clean_records(&mut records);
    save_snapshot(&path, &records).unwrap();

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, json!([{"role-name": "A", "medium": "Sound"}]));
}

#[test]
fn test_malformed_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roles.json");

    fs::write(&path, r#"{"role-name": "not an array"}"#).unwrap();
    assert!(matches!(load_snapshot(&path), Err(RoledeckError::Snapshot { .. })));

    fs::write(&path, r#"[{"description": "no name"}]"#).unwrap();
    assert!(matches!(load_snapshot(&path), Err(RoledeckError::Snapshot { .. })));
}

#[test]
fn test_missing_snapshot_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_snapshot(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, RoledeckError::Io { .. }));
}

#[test]
fn test_save_with_history_backs_up_previous_version() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("design_roles_data.json");

    assert!(save_with_history(&path, &[Record::new("First")]).unwrap().is_none());

    let backup = save_with_history(&path, &sample()).unwrap().unwrap();
    let previous = load_snapshot(&backup).unwrap();
    assert_eq!(previous, vec![Record::new("First")]);
    assert_eq!(load_snapshot(&path).unwrap(), sample());

    assert_eq!(list_history(&path).unwrap(), vec![backup]);
}

#[test]
fn test_clean_then_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roles.json");

    let mut records = vec![
        Record::new(" Art Director ").with_level("Lead "),
        Record::new("Type Designer"),
    ];
    let report = clean_records(&mut records);
    save_snapshot(&path, &records).unwrap();

    assert_eq!(report.records_changed, 1);
    let loaded = load_snapshot(&path).unwrap();
    assert_eq!(loaded[0].name, "Art Director");
    assert_eq!(loaded[0].org_level.as_deref(), Some("Lead"));
}
