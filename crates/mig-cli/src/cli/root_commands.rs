use std::path::PathBuf;

use clap::{Args, Subcommand};
use mig_core::ReportFormat;

use crate::cli::Instance;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Compare source and target and write the migration assessment.
    Report(ReportArgs),
    /// Fetch one instance and save its configuration snapshot as JSON.
    Snapshot(SnapshotArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Report file path (defaults to `report.output_path`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format: markdown, json (defaults to `report.format`)
    #[arg(long)]
    pub format: Option<ReportFormat>,

    /// Add a Project Roles section after Issue Types
    #[arg(long)]
    pub include_roles: bool,

    /// Read the source instance from a saved snapshot instead of fetching it
    #[arg(long, value_name = "FILE")]
    pub source_snapshot: Option<PathBuf>,

    /// Read the target instance from a saved snapshot instead of fetching it
    #[arg(long, value_name = "FILE")]
    pub target_snapshot: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct SnapshotArgs {
    /// Instance to fetch
    #[arg(value_enum)]
    pub instance: Instance,

    /// Snapshot file path (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}
