//! Connection settings for one issue tracker instance.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InstanceConfig {
    /// Base URL (e.g., `https://source.atlassian.net`).
    #[serde(default)]
    pub base_url: String,

    /// Account email used for basic authentication.
    #[serde(default)]
    pub email: String,

    /// API token paired with `email`.
    #[serde(default)]
    pub token: String,
}

impl InstanceConfig {
    /// Check if the instance has the minimum required fields to be queried.
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty() && !self.email.is_empty() && !self.token.is_empty()
    }

    /// The instance itself when it can be queried, or an error naming the
    /// `section` keys and environment variables still to be set.
    pub fn require(&self, section: &str) -> Result<&Self, ConfigError> {
        if self.is_configured() {
            Ok(self)
        } else {
            Err(ConfigError::NotConfigured {
                section: section.to_string(),
            })
        }
    }

    /// Base URL without surrounding whitespace or trailing slashes.
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}
