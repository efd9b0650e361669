use serde::{Deserialize, Serialize};

use super::{NOT_AVAILABLE, Record};

/// Field types that cannot be migrated and are never proposed for addition.
pub const NON_MIGRATABLE_FIELD_TYPES: [&str; 4] = [
    "option-with-child",
    "project",
    "sd-servicelevelagreement",
    "multiuserpicker",
];

/// A field definition. The field endpoint lists system and custom fields
/// alike; both are compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<FieldSchema>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    /// Plugin-qualified custom type, e.g. `com.atlassian...:select`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<String>,
}

impl CustomField {
    pub fn new(name: impl Into<String>, field_type: Option<&str>) -> Self {
        Self {
            name: Some(name.into()),
            schema: field_type.map(|t| FieldSchema {
                field_type: Some(t.to_string()),
                custom: None,
            }),
            ..Self::default()
        }
    }

    /// Schema type, or [`NOT_AVAILABLE`] when the field has no schema.
    #[must_use]
    pub fn field_type(&self) -> &str {
        self.schema
            .as_ref()
            .and_then(|s| s.field_type.as_deref())
            .unwrap_or(NOT_AVAILABLE)
    }
}

/// Whether fields of `field_type` may be created in the target instance.
#[must_use]
pub fn is_migratable_type(field_type: &str) -> bool {
    !NON_MIGRATABLE_FIELD_TYPES.contains(&field_type)
}

impl Record for CustomField {
    fn identity(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
