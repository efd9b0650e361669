//! Ordered identity maps.

use indexmap::IndexMap;
use mig_core::EntityKind;
use mig_core::entities::Record;

use crate::error::{ReconcileError, Side};

/// Identity → value, in first-seen order. A repeated identity keeps its
/// first position and takes the last value.
pub type Keyed = IndexMap<String, String>;

/// Identity of the record at `position`, or an error naming it.
pub fn identity<R: Record>(
    kind: EntityKind,
    side: Side,
    position: usize,
    record: &R,
) -> Result<&str, ReconcileError> {
    record
        .identity()
        .ok_or(ReconcileError::MissingIdentity {
            kind,
            side,
            attribute: kind.identity(),
            position,
        })
}

/// Build the identity map for one side.
pub fn keyed<R, F>(
    kind: EntityKind,
    side: Side,
    records: &[R],
    value: F,
) -> Result<Keyed, ReconcileError>
where
    R: Record,
    F: Fn(&R) -> &str,
{
    let mut map = Keyed::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let key = identity(kind, side, position, record)?;
        map.insert(key.to_string(), value(record).to_string());
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mig_core::entities::{Described, NamedRecord};
    use pretty_assertions::assert_eq;

    #[test]
    fn repeated_identity_keeps_first_position_last_value() {
        let records = vec![
            NamedRecord::new("High", Some("first")),
            NamedRecord::new("Low", None),
            NamedRecord::new("High", Some("second")),
        ];
        let map = keyed(EntityKind::Priorities, Side::Source, &records, |r| r.description()).unwrap();
        let entries: Vec<_> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("High", "second"), ("Low", "No description")]);
    }

    #[test]
    fn missing_identity_reports_position() {
        let records = vec![NamedRecord::new("High", None), NamedRecord::default()];
        let err = keyed(EntityKind::Priorities, Side::Target, &records, |r| r.description())
            .unwrap_err();
        assert_eq!(err.to_string(), "target priorities record at position 1 has no name");
    }
}
