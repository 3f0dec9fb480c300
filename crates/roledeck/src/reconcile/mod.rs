//! Reconciliation of a local snapshot against the hosted role table.
//!
//! Computing the plan is pure; applying it is a separate step that talks to
//! a [`RoleStore`](crate::store::RoleStore).
//!
//! ```
//! use roledeck::Record;
//! use roledeck::reconcile::reconcile;
//!
//! let local = vec![Record::new("X").with_level("L1")];
//! let remote = vec![Record::new("X").with_level("L2"), Record::new("Y")];
//!
//! let plan = reconcile(&local, &remote, false);
//! assert_eq!(plan.to_update.len(), 1);
//! assert!(plan.to_delete.is_empty());
//! ```

mod apply;
mod plan;

pub use apply::{ApplyPhase, ApplyReport, apply_plan};
pub use plan::{ReconcilePlan, reconcile};
