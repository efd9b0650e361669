//! Entity kinds compared between two instances.
//!
//! Every kind carries a stable tag (used as the snapshot JSON key and in the
//! JSON report), a display title for the report, and the attribute that
//! identifies a record across instances.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Attribute used to match records of one kind across instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityAttribute {
    Key,
    Name,
}

impl IdentityAttribute {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Key => "key",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for IdentityAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category of configuration object being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    #[serde(rename = "projects")]
    Projects,
    #[serde(rename = "priorities")]
    Priorities,
    #[serde(rename = "resolutions")]
    Resolutions,
    #[serde(rename = "roles")]
    Roles,
    #[serde(rename = "issuetypes")]
    IssueTypes,
    #[serde(rename = "filters")]
    Filters,
    #[serde(rename = "dashboards")]
    Dashboards,
    #[serde(rename = "customfields")]
    CustomFields,
    #[serde(rename = "statuses")]
    Statuses,
}

impl EntityKind {
    /// Every kind, in fetch order.
    pub const ALL: [Self; 9] = [
        Self::Projects,
        Self::Priorities,
        Self::Resolutions,
        Self::Roles,
        Self::IssueTypes,
        Self::CustomFields,
        Self::Statuses,
        Self::Filters,
        Self::Dashboards,
    ];

    /// Report section order. Project roles are fetched but only reported on
    /// request, see [`EntityKind::report_order`].
    pub const REPORT_ORDER: [Self; 8] = [
        Self::Projects,
        Self::Priorities,
        Self::Resolutions,
        Self::IssueTypes,
        Self::Filters,
        Self::Dashboards,
        Self::CustomFields,
        Self::Statuses,
    ];

    /// Report section order, with project roles inserted after issue types
    /// when `include_roles` is set.
    #[must_use]
    pub fn report_order(include_roles: bool) -> Vec<Self> {
        let mut order = Vec::with_capacity(Self::ALL.len());
        for kind in Self::REPORT_ORDER {
            order.push(kind);
            if include_roles && kind == Self::IssueTypes {
                order.push(Self::Roles);
            }
        }
        order
    }

    /// Tag used in snapshot files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Priorities => "priorities",
            Self::Resolutions => "resolutions",
            Self::Roles => "roles",
            Self::IssueTypes => "issuetypes",
            Self::Filters => "filters",
            Self::Dashboards => "dashboards",
            Self::CustomFields => "customfields",
            Self::Statuses => "statuses",
        }
    }

    /// Section title used in the report.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Priorities => "Priorities",
            Self::Resolutions => "Resolutions",
            Self::Roles => "Project Roles",
            Self::IssueTypes => "Issue Types",
            Self::Filters => "Filters",
            Self::Dashboards => "Dashboards",
            Self::CustomFields => "Custom Fields",
            Self::Statuses => "Statuses",
        }
    }

    /// Plural noun used in prose ("Number of issue types in ...").
    #[must_use]
    pub fn noun(self) -> String {
        self.title().to_lowercase()
    }

    #[must_use]
    pub const fn identity(self) -> IdentityAttribute {
        match self {
            Self::Projects => IdentityAttribute::Key,
            _ => IdentityAttribute::Name,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
