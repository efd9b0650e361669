//! # mig-core
//!
//! Core types shared across the migscope crates:
//! - Entity kinds with their display titles and identity attributes
//! - Typed entity records as returned by the issue tracker REST API
//! - The per-instance snapshot consumed by reconciliation
//! - Report output formats
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod format;
pub mod kind;
pub mod snapshot;

pub use errors::CoreError;
pub use format::ReportFormat;
pub use kind::{EntityKind, IdentityAttribute};
pub use snapshot::InstanceSnapshot;
