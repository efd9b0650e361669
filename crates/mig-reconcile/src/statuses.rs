//! Statuses, compared by category name.

use mig_core::EntityKind;
use mig_core::entities::Status;

use crate::error::{ReconcileError, Side};
use crate::keyed::keyed;
use crate::outcome::{Counts, Divergence, Entry, Findings, Reconciliation};

const KIND: EntityKind = EntityKind::Statuses;

/// Reconcile statuses: additions carry the category; a name on both sides
/// conflicts only when the category names differ.
pub fn reconcile_statuses(
    source: &[Status],
    target: &[Status],
) -> Result<Reconciliation, ReconcileError> {
    let source_categories = keyed(KIND, Side::Source, source, Status::category_name)?;
    let target_categories = keyed(KIND, Side::Target, target, Status::category_name)?;

    let mut additions = Vec::new();
    let mut conflicts = Vec::new();
    for (name, category) in &source_categories {
        match target_categories.get(name) {
            None => additions.push(Entry::new(name, category)),
            Some(target_category) if target_category != category => {
                conflicts.push(Divergence {
                    name: name.clone(),
                    source: category.clone(),
                    target: target_category.clone(),
                });
            }
            Some(_) => {}
        }
    }

    Ok(Reconciliation {
        kind: KIND,
        counts: Counts {
            source: source.len(),
            target: target.len(),
        },
        findings: Findings::Statuses {
            additions,
            conflicts,
        },
    })
}
