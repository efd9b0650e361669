//! Cross-cutting error types for migscope.
//!
//! Domain-specific errors (`FetchError`, `ReconcileError`, ...) live in their
//! respective crates. They converge into `anyhow` in `mig-cli`.

use thiserror::Error;

/// Errors that can be raised by any migscope crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An unrecognized report format was requested.
    #[error("Unknown report format: {0}")]
    UnknownFormat(String),

    /// A snapshot file could not be decoded.
    #[error("Invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
