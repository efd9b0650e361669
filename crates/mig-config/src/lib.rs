//! # mig-config
//!
//! Layered configuration loading for migscope using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MIGSCOPE_*` prefix, `__` as separator)
//! 2. External secret overrides (see `mig-secrets`)
//! 3. Project-level `./migscope.toml`
//! 4. User-level `~/.config/migscope/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MIGSCOPE_SOURCE__TOKEN` -> `source.token`,
//! `MIGSCOPE_FETCH__PAGE_SIZE` -> `fetch.page_size`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use mig_config::MigConfig;
//!
//! let config = MigConfig::load().expect("config");
//! config.target.require("target").expect("target instance configured");
//! println!("comparing {} -> {}", config.source.base_url(), config.target.base_url());
//! ```

mod error;
mod fetch;
mod instance;
mod report;

pub use error::ConfigError;
pub use fetch::FetchConfig;
pub use instance::InstanceConfig;
pub use report::{DEFAULT_OUTPUT_PATH, ReportConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix shared by every environment variable read into the config.
pub const ENV_PREFIX: &str = "MIGSCOPE_";

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "migscope.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MigConfig {
    /// Instance the migration reads from.
    #[serde(default)]
    pub source: InstanceConfig,
    /// Instance the migration writes into.
    #[serde(default)]
    pub target: InstanceConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl MigConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; the binary loads it before calling this.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env_overrides(&[])
    }

    /// Load configuration with externally resolved `MIGSCOPE_*` key/value
    /// pairs layered below the process environment.
    pub fn load_with_env_overrides(overrides: &[(String, String)]) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_with_overrides(overrides).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        Self::figment_with_overrides(&[])
    }

    fn figment_with_overrides(overrides: &[(String, String)]) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Secret store overrides, typed the same way `Env` types values
        for (key, value) in overrides {
            if let Some(path) = env_key_to_path(key) {
                let Ok(value) = value.parse::<Value>();
                figment = figment.merge(Serialized::default(&path, value));
            }
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__").ignore(&["log"]))
    }

    /// Reject values that would make fetching impossible.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fetch.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "fetch.page_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.report.output_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "report.output_path".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("migscope").join("config.toml"))
    }
}

/// Map `MIGSCOPE_SOURCE__TOKEN` to the figment key path `source.token`.
fn env_key_to_path(key: &str) -> Option<String> {
    let rest = key.strip_prefix(ENV_PREFIX)?;
    if rest.is_empty() {
        return None;
    }
    Some(rest.to_ascii_lowercase().replace("__", "."))
}
