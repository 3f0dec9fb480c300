//! Role stores: where the collection lives.
//!
//! The hosted table is reached through [`SupabaseStore`]. [`SnapshotStore`]
//! serves a local snapshot file instead, and [`MemoryStore`] keeps everything
//! in process for tests.
//!
//! # Example
//!
//! ```no_run
//! use roledeck::store::{RoleStore, SupabaseStore};
//!
//! let store = SupabaseStore::from_env().unwrap();
//! let records = store.select_all().unwrap();
//! println!("{} roles in {}", records.len(), store.name());
//! ```

mod config;
mod file;
mod memory;
mod provider;
mod supabase;

pub use config::{DEFAULT_TABLE, KeyKind, StoreConfig};
pub use file::SnapshotStore;
pub use memory::MemoryStore;
pub use provider::{RoleStore, StoreOperation};
pub use supabase::SupabaseStore;
