//! # mig-reconcile
//!
//! Compares the records of one entity kind between a source and a target
//! snapshot.
//!
//! | kind | identity | compared value | findings |
//! |---|---|---|---|
//! | projects | `key` | description | additions, key conflicts |
//! | priorities, resolutions, roles, issue types | `name` | description | additions, merges |
//! | filters, dashboards | `name` | - | name collisions |
//! | custom fields | `name` | schema type | additions, type conflicts, non-migratable |
//! | statuses | `name` | category name | additions, category conflicts |
//!
//! Every rule is a pure function of its inputs and follows the source
//! snapshot's order. Counts are raw collection sizes.

mod collisions;
mod custom_fields;
mod error;
mod generic;
mod keyed;
mod outcome;
mod statuses;

pub use collisions::reconcile_collisions;
pub use custom_fields::reconcile_custom_fields;
pub use error::{ReconcileError, Side};
pub use generic::reconcile_described;
pub use outcome::{Counts, Divergence, Entry, Findings, Reconciliation};
pub use statuses::reconcile_statuses;

use mig_core::{EntityKind, InstanceSnapshot};

/// Reconcile one entity kind between two snapshots.
///
/// # Errors
///
/// Returns [`ReconcileError::MissingIdentity`] if a record on either side
/// lacks the kind's identity attribute.
pub fn reconcile(
    kind: EntityKind,
    source: &InstanceSnapshot,
    target: &InstanceSnapshot,
) -> Result<Reconciliation, ReconcileError> {
    tracing::info!(
        section = kind.title(),
        source = source.count(kind),
        target = target.count(kind),
        "analyzing"
    );

    match kind {
        EntityKind::Projects => reconcile_described(kind, &source.projects, &target.projects),
        EntityKind::Priorities => reconcile_described(kind, &source.priorities, &target.priorities),
        EntityKind::Resolutions => {
            reconcile_described(kind, &source.resolutions, &target.resolutions)
        }
        EntityKind::Roles => reconcile_described(kind, &source.roles, &target.roles),
        EntityKind::IssueTypes => {
            reconcile_described(kind, &source.issue_types, &target.issue_types)
        }
        EntityKind::Filters => reconcile_collisions(kind, &source.filters, &target.filters),
        EntityKind::Dashboards => {
            reconcile_collisions(kind, &source.dashboards, &target.dashboards)
        }
        EntityKind::CustomFields => {
            reconcile_custom_fields(&source.custom_fields, &target.custom_fields)
        }
        EntityKind::Statuses => reconcile_statuses(&source.statuses, &target.statuses),
    }
}
