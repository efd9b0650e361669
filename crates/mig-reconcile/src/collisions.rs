//! Name collisions for filters and dashboards.
//!
//! Neither kind gets an additions table: every filter and dashboard is
//! recreated in the target, so only names already taken there matter.

use std::collections::HashSet;

use mig_core::EntityKind;
use mig_core::entities::Record;

use crate::error::{ReconcileError, Side};
use crate::keyed::identity;
use crate::outcome::{Counts, Findings, Reconciliation};

/// Names of source records that also exist in the target, one entry per
/// source record, in source order.
pub fn reconcile_collisions<R: Record>(
    kind: EntityKind,
    source: &[R],
    target: &[R],
) -> Result<Reconciliation, ReconcileError> {
    let mut taken = HashSet::with_capacity(target.len());
    for (position, record) in target.iter().enumerate() {
        taken.insert(identity(kind, Side::Target, position, record)?);
    }

    let mut names = Vec::new();
    for (position, record) in source.iter().enumerate() {
        let name = identity(kind, Side::Source, position, record)?;
        if taken.contains(name) {
            names.push(name.to_string());
        }
    }

    Ok(Reconciliation {
        kind,
        counts: Counts {
            source: source.len(),
            target: target.len(),
        },
        findings: Findings::Collisions { names },
    })
}
