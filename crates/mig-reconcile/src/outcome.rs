//! Reconciliation results.

use mig_core::EntityKind;
use serde::Serialize;

/// Raw collection sizes, before any filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub source: usize,
    pub target: usize,
}

/// A key with the value shown for it: a description, a type or a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// A name present on both sides with different values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Divergence {
    pub name: String,
    pub source: String,
    pub target: String,
}

/// Per-kind findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Findings {
    /// Projects, priorities, resolutions, roles and issue types.
    Generic {
        additions: Vec<Entry>,
        merges: Vec<Entry>,
    },
    /// Filters and dashboards: names found on both sides, in source order.
    Collisions { names: Vec<String> },
    CustomFields {
        additions: Vec<Entry>,
        conflicts: Vec<Divergence>,
        non_migratable: Vec<Entry>,
    },
    Statuses {
        additions: Vec<Entry>,
        conflicts: Vec<Divergence>,
    },
}

impl Findings {
    /// Number of records that will be created in the target.
    #[must_use]
    pub fn addition_count(&self) -> usize {
        match self {
            Self::Generic { additions, .. }
            | Self::CustomFields { additions, .. }
            | Self::Statuses { additions, .. } => additions.len(),
            Self::Collisions { .. } => 0,
        }
    }

    /// Number of records needing attention because they exist on both sides.
    #[must_use]
    pub fn conflict_count(&self) -> usize {
        match self {
            Self::Generic { merges, .. } => merges.len(),
            Self::Collisions { names } => names.len(),
            Self::CustomFields { conflicts, .. } | Self::Statuses { conflicts, .. } => {
                conflicts.len()
            }
        }
    }
}

/// Result of reconciling one entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub kind: EntityKind,
    pub counts: Counts,
    pub findings: Findings,
}
