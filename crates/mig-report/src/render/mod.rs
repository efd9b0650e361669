//! Rendering and writing of a finished [`Report`].

pub mod markdown;

use std::path::{Path, PathBuf};

use mig_core::ReportFormat;

use crate::document::Report;
use crate::error::ReportError;

/// Render a report to a string in the requested format.
///
/// # Errors
///
/// Returns [`ReportError::Json`] if JSON serialization fails.
pub fn render(report: &Report, format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Markdown => Ok(markdown::render(report)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Render `report` and write it to `path`, creating parent directories.
///
/// Returns the path written.
///
/// # Errors
///
/// Returns [`ReportError::Io`] when the file or its directory cannot be
/// written.
pub fn write_report(
    report: &Report,
    format: ReportFormat,
    path: &Path,
) -> Result<PathBuf, ReportError> {
    let rendered = render(report, format)?;
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, rendered).map_err(io_err)?;

    tracing::info!(path = %path.display(), format = %format, "report written");
    Ok(path.to_path_buf())
}
