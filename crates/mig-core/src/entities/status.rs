use serde::{Deserialize, Serialize};

use super::{NOT_AVAILABLE, Record};

/// A workflow status, compared by the name of its category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_category: Option<StatusCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Status {
    pub fn new(name: impl Into<String>, category: &str) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            status_category: Some(StatusCategory {
                key: None,
                name: Some(category.to_string()),
            }),
        }
    }

    /// Category name, or [`NOT_AVAILABLE`] when absent.
    #[must_use]
    pub fn category_name(&self) -> &str {
        self.status_category
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or(NOT_AVAILABLE)
    }
}

impl Record for Status {
    fn identity(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
