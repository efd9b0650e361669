//! Report output settings.

use mig_core::ReportFormat;
use serde::{Deserialize, Serialize};

/// Default output file name, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "instance_analysis.md";

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Where the rendered report is written.
    #[serde(default = "default_output_path")]
    pub output_path: String,

    #[serde(default)]
    pub format: ReportFormat,

    /// Add a "Project Roles" section after issue types.
    #[serde(default)]
    pub include_roles: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            format: ReportFormat::default(),
            include_roles: false,
        }
    }
}
