pub mod report;
pub mod snapshot;

use mig_config::MigConfig;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: &Commands,
    config: &MigConfig,
    flags: GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Report(args) => report::handle(args, config, flags).await,
        Commands::Snapshot(args) => snapshot::handle(args, config).await,
    }
}
