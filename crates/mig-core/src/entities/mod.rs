//! Typed entity records as returned by the issue tracker REST API.
//!
//! Every field the comparison reads is an `Option`: the API omits fields
//! freely, and a missing value is substituted with a placeholder rather than
//! failing. Unknown JSON fields are ignored; a field with the wrong JSON type
//! fails decoding, so malformed payloads are rejected at fetch time.

mod custom_field;
mod dashboard;
mod filter;
mod named;
mod project;
mod status;

pub use custom_field::{CustomField, FieldSchema, NON_MIGRATABLE_FIELD_TYPES, is_migratable_type};
pub use dashboard::{DEFAULT_DASHBOARD_NAME, Dashboard};
pub use filter::Filter;
pub use named::NamedRecord;
pub use project::Project;
pub use status::{Status, StatusCategory};

/// Placeholder for a record without a description.
pub const NO_DESCRIPTION: &str = "No description";

/// Placeholder for a missing type or category.
pub const NOT_AVAILABLE: &str = "N/A";

/// A record that can be matched across instances.
pub trait Record {
    /// Value of the kind's identity attribute, if the record has one.
    fn identity(&self) -> Option<&str>;
}

/// A record compared by its free-text description.
pub trait Described: Record {
    /// Description, or [`NO_DESCRIPTION`] when absent.
    fn description(&self) -> &str;
}
