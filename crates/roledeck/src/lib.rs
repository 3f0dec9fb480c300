//! roledeck: reconcile and browse a table of design roles.
//!
//! The role table lives in a hosted Postgres (Supabase). This crate keeps a
//! local JSON snapshot in step with it and powers a faceted dashboard over it.
//!
//! # Core Pieces
//!
//! - **Reconciliation**: classify a local snapshot against the remote table
//!   into inserts, updates and (optionally) deletes
//! - **Filtering**: industry / org-level / medium facets plus name search
//! - **Stores**: the hosted table, a snapshot file, or memory, behind one trait
//!
//! # Example
//!
//! ```no_run
//! use roledeck::reconcile::{apply_plan, reconcile};
//! use roledeck::snapshot::load_snapshot;
//! use roledeck::store::{RoleStore, SupabaseStore};
//!
//! let local = load_snapshot("design_roles_data.json").unwrap();
//! let store = SupabaseStore::from_env().unwrap();
//! let remote = store.select_all().unwrap();
//!
//! let plan = reconcile(&local, &remote, false);
//! println!("{} to insert, {} to update", plan.to_insert.len(), plan.to_update.len());
//! apply_plan(&store, &plan).unwrap();
//! ```

pub mod error;
pub mod filter;
pub mod reconcile;
pub mod record;
pub mod snapshot;
pub mod store;

mod catalog;

pub use catalog::RoleCatalog;
pub use error::{Result, RoledeckError};
pub use filter::{Facet, FacetSelection, Facets, FilterQuery, derive_facets, filter};
pub use reconcile::{ApplyReport, ReconcilePlan, apply_plan, reconcile};
pub use record::{Column, Record, RoleCard};
pub use store::{MemoryStore, RoleStore, SnapshotStore, StoreConfig, SupabaseStore};
