//! Reconciliation error types.

use mig_core::{EntityKind, IdentityAttribute};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReconcileError {
    /// A record lacks the attribute that identifies it across instances.
    #[error("{side} {kind} record at position {position} has no {attribute}")]
    MissingIdentity {
        kind: EntityKind,
        side: Side,
        attribute: IdentityAttribute,
        position: usize,
    },
}

/// Which snapshot a record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Source => "source",
            Self::Target => "target",
        })
    }
}
