use anyhow::Context;
use mig_config::MigConfig;
use mig_fetch::InstanceClient;

use crate::cli::{Instance, SnapshotArgs};

/// Handle `migscope snapshot <source|target>`.
pub async fn handle(args: &SnapshotArgs, config: &MigConfig) -> anyhow::Result<()> {
    let label = args.instance.label();
    let instance = match args.instance {
        Instance::Source => &config.source,
        Instance::Target => &config.target,
    }
    .require(label)?;

    let client = InstanceClient::new(label, instance, &config.fetch)
        .with_context(|| format!("cannot query the {label} instance"))?;
    let snapshot = client
        .fetch_snapshot()
        .await
        .with_context(|| format!("failed to fetch the {label} instance"))?;
    let json = serde_json::to_string_pretty(&snapshot)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write snapshot {}", path.display()))?;
            tracing::info!(path = %path.display(), instance = label, "snapshot written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
