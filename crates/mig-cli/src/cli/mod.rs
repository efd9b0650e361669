use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, Instance};
pub use root_commands::{Commands, ReportArgs, SnapshotArgs};

/// Top-level CLI parser for the `migscope` binary.
#[derive(Debug, Parser)]
#[command(
    name = "migscope",
    version,
    about = "Compare two issue tracker instances ahead of a migration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (errors only, no summary table)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
