//! Per-instance snapshot of every compared entity kind.

use serde::{Deserialize, Serialize};

use crate::entities::{CustomField, Dashboard, Filter, NamedRecord, Project, Status};
use crate::errors::CoreError;
use crate::kind::EntityKind;

/// Everything fetched from one instance, one ordered sequence per kind.
///
/// Serializes with the entity kind tags as keys, so a snapshot written by
/// `migscope snapshot` can be fed back into `migscope report`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceSnapshot {
    /// Base URL of the instance the snapshot was taken from.
    #[serde(default)]
    pub instance: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub priorities: Vec<NamedRecord>,
    #[serde(default)]
    pub resolutions: Vec<NamedRecord>,
    #[serde(default)]
    pub roles: Vec<NamedRecord>,
    #[serde(default, rename = "issuetypes")]
    pub issue_types: Vec<NamedRecord>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default, deserialize_with = "dashboards::deserialize")]
    pub dashboards: Vec<Dashboard>,
    #[serde(default, rename = "customfields")]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub statuses: Vec<Status>,
}

impl InstanceSnapshot {
    #[must_use]
    pub fn new(instance: impl Into<String>) -> Self {
        Self {
            instance: instance.into(),
            ..Self::default()
        }
    }

    /// Decode a snapshot from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Snapshot`] if the JSON does not match the
    /// snapshot shape.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the dashboards, dropping the built-in default dashboard.
    pub fn set_dashboards(&mut self, dashboards: Vec<Dashboard>) {
        self.dashboards = dashboards::without_default(dashboards);
    }

    /// Raw number of records held for `kind`.
    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Projects => self.projects.len(),
            EntityKind::Priorities => self.priorities.len(),
            EntityKind::Resolutions => self.resolutions.len(),
            EntityKind::Roles => self.roles.len(),
            EntityKind::IssueTypes => self.issue_types.len(),
            EntityKind::Filters => self.filters.len(),
            EntityKind::Dashboards => self.dashboards.len(),
            EntityKind::CustomFields => self.custom_fields.len(),
            EntityKind::Statuses => self.statuses.len(),
        }
    }

    /// Records of one of the name + description kinds.
    ///
    /// Returns `None` for kinds with a dedicated record type.
    #[must_use]
    pub fn named(&self, kind: EntityKind) -> Option<&[NamedRecord]> {
        match kind {
            EntityKind::Priorities => Some(&self.priorities),
            EntityKind::Resolutions => Some(&self.resolutions),
            EntityKind::Roles => Some(&self.roles),
            EntityKind::IssueTypes => Some(&self.issue_types),
            _ => None,
        }
    }
}

mod dashboards {
    use serde::{Deserialize, Deserializer};

    use crate::entities::Dashboard;

    pub fn without_default(dashboards: Vec<Dashboard>) -> Vec<Dashboard> {
        dashboards.into_iter().filter(|d| !d.is_default()).collect()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Dashboard>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<Dashboard>::deserialize(deserializer).map(without_default)
    }
}
