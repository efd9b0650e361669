//! Description-compared kinds: projects, priorities, resolutions, project
//! roles and issue types.

use mig_core::EntityKind;
use mig_core::entities::Described;

use crate::error::{ReconcileError, Side};
use crate::keyed::keyed;
use crate::outcome::{Counts, Entry, Findings, Reconciliation};

/// Split source records into additions (identity absent from target) and
/// merges (identity present on both sides).
///
/// Merges carry the source-side description even when the target's differs.
pub fn reconcile_described<R: Described>(
    kind: EntityKind,
    source: &[R],
    target: &[R],
) -> Result<Reconciliation, ReconcileError> {
    let source_map = keyed(kind, Side::Source, source, Described::description)?;
    let target_map = keyed(kind, Side::Target, target, Described::description)?;

    let (merges, additions): (Vec<_>, Vec<_>) = source_map
        .into_iter()
        .map(|(key, value)| Entry { key, value })
        .partition(|entry| target_map.contains_key(&entry.key));

    Ok(Reconciliation {
        kind,
        counts: Counts {
            source: source.len(),
            target: target.len(),
        },
        findings: Findings::Generic { additions, merges },
    })
}
