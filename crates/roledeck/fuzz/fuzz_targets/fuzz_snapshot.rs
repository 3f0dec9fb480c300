//! Fuzz target for snapshot parsing.
//!
//! Any input that parses as a snapshot must:
//! 1. Reconcile against itself with no changes
//! 2. Survive a serialize/parse cycle unchanged

#![no_main]

use libfuzzer_sys::fuzz_target;
use roledeck::reconcile::reconcile;
use roledeck::snapshot::ensure_unique_names;
use roledeck::Record;

fuzz_target!(|data: &[u8]| {
    if data.len() > 64_000 {
        return;
    }

    let Ok(records) = serde_json::from_slice::<Vec<Record>>(data) else {
        return;
    };

    if ensure_unique_names(&records).is_ok() {
        let plan = reconcile(&records, &records, true);
        assert!(plan.is_empty());
        assert_eq!(plan.unchanged, records.len());
    }

    let text = serde_json::to_string(&records).expect("records serialize");
    let again: Vec<Record> = serde_json::from_str(&text).expect("serialized records parse");
    assert_eq!(again.len(), records.len());
});
