//! HTTP fetch settings shared by both instances.

use serde::{Deserialize, Serialize};

/// Default page size for paginated endpoints.
const fn default_page_size() -> u32 {
    50
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// `maxResults` sent to the filter and dashboard endpoints.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
