use serde::{Deserialize, Serialize};

use super::{Described, NO_DESCRIPTION, Record};

/// A project, identified across instances by its key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Project {
    fn identity(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

impl Described for Project {
    fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}
