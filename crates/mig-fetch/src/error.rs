//! Fetch error types.

use thiserror::Error;

/// Errors that abort fetching a snapshot from an instance.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The instance has no base URL or credentials.
    #[error("instance '{0}' is not configured (base_url, email and token are required)")]
    NotConfigured(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The instance returned a non-success status code.
    #[error("API error ({status}) from {url}: {message}")]
    Api {
        /// HTTP status code returned by the instance.
        status: u16,
        /// Request URL.
        url: String,
        /// Error message or response body.
        message: String,
    },

    /// The instance returned a 429 Too Many Requests response. Not retried.
    #[error("rate limited by {url}{}", retry_hint(.retry_after_secs))]
    RateLimited {
        /// Request URL.
        url: String,
        /// Seconds the instance asked us to wait, when it said.
        retry_after_secs: Option<u64>,
    },

    /// Failed to parse a response body.
    #[error("parse error for {url}: {reason}")]
    Parse {
        /// Request URL.
        url: String,
        /// Decoder message.
        reason: String,
    },
}

#[allow(clippy::ref_option)]
fn retry_hint(retry_after_secs: &Option<u64>) -> String {
    retry_after_secs.map_or_else(String::new, |secs| format!(" (retry after {secs}s)"))
}
