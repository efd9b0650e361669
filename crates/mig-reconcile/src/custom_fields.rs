//! Custom fields, compared by schema type.

use mig_core::EntityKind;
use mig_core::entities::{CustomField, is_migratable_type};

use crate::error::{ReconcileError, Side};
use crate::keyed::keyed;
use crate::outcome::{Counts, Divergence, Entry, Findings, Reconciliation};

const KIND: EntityKind = EntityKind::CustomFields;

/// Reconcile field definitions.
///
/// - additions: names absent from the target whose type is migratable;
/// - conflicts: names on both sides whose types differ;
/// - non-migratable: every source field with a denylisted type, whether or
///   not the target has it.
pub fn reconcile_custom_fields(
    source: &[CustomField],
    target: &[CustomField],
) -> Result<Reconciliation, ReconcileError> {
    let source_types = keyed(KIND, Side::Source, source, CustomField::field_type)?;
    let target_types = keyed(KIND, Side::Target, target, CustomField::field_type)?;

    let mut additions = Vec::new();
    let mut conflicts = Vec::new();
    let mut non_migratable = Vec::new();

    for (name, source_type) in &source_types {
        let migratable = is_migratable_type(source_type);
        match target_types.get(name) {
            None if migratable => additions.push(Entry::new(name, source_type)),
            Some(target_type) if target_type != source_type => conflicts.push(Divergence {
                name: name.clone(),
                source: source_type.clone(),
                target: target_type.clone(),
            }),
            _ => {}
        }
        if !migratable {
            non_migratable.push(Entry::new(name, source_type));
        }
    }

    Ok(Reconciliation {
        kind: KIND,
        counts: Counts {
            source: source.len(),
            target: target.len(),
        },
        findings: Findings::CustomFields {
            additions,
            conflicts,
            non_migratable,
        },
    })
}
