use serde::{Deserialize, Serialize};

use super::Record;

/// Name of the built-in dashboard every instance has. It is never compared.
pub const DEFAULT_DASHBOARD_NAME: &str = "Default dashboard";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Dashboard {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Whether this is the built-in default dashboard.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.name.as_deref() == Some(DEFAULT_DASHBOARD_NAME)
    }
}

impl Record for Dashboard {
    fn identity(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
