use serde::{Deserialize, Serialize};

use super::{Described, NO_DESCRIPTION, Record};

/// A name + description record: priorities, resolutions, project roles and
/// issue types all share this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NamedRecord {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: Some(name.into()),
            description: description.map(str::to_string),
        }
    }
}

impl Record for NamedRecord {
    fn identity(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl Described for NamedRecord {
    fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}
