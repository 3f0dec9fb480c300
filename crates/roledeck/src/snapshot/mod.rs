//! Local JSON snapshots of the role table.
//!
//! A snapshot is a JSON array of role records, written with two-space
//! indentation so diffs stay readable in version control.
//!
//! ```no_run
//! use roledeck::snapshot::{clean_records, load_snapshot, save_with_history};
//!
//! let mut records = load_snapshot("design_roles_data.json").unwrap();
//! let report = clean_records(&mut records);
//! save_with_history("design_roles_data.json", &records).unwrap();
//! println!("Cleaned {} records.", report.records);
//! ```

mod clean;
mod persistence;

pub use clean::{CleanReport, clean_records};
pub use persistence::{
    DEFAULT_SNAPSHOT, ensure_unique_names, list_history, load_snapshot, save_snapshot,
    save_with_history,
};
