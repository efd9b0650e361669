use std::path::{Path, PathBuf};

use anyhow::Context;
use mig_config::{FetchConfig, InstanceConfig, MigConfig};
use mig_core::{EntityKind, InstanceSnapshot, ReportFormat};
use mig_fetch::InstanceClient;

use crate::cli::{GlobalFlags, ReportArgs};
use crate::output::print_summary;

/// Handle `migscope report`.
pub async fn handle(
    args: &ReportArgs,
    config: &MigConfig,
    flags: GlobalFlags,
) -> anyhow::Result<()> {
    // Both clients exist before the first request is sent.
    let source_client = client_unless_saved(
        "source",
        &config.source,
        &config.fetch,
        args.source_snapshot.as_deref(),
    )?;
    let target_client = client_unless_saved(
        "target",
        &config.target,
        &config.fetch,
        args.target_snapshot.as_deref(),
    )?;

    let source = resolve(source_client.as_ref(), args.source_snapshot.as_deref()).await?;
    let target = resolve(target_client.as_ref(), args.target_snapshot.as_deref()).await?;

    let include_roles = args.include_roles || config.report.include_roles;
    let kinds = EntityKind::report_order(include_roles);
    let report = mig_report::build_report(&source, &target, &kinds, chrono::Utc::now());

    let (path, format) = destination(args, config);
    let written = mig_report::write_report(&report, format, &path)
        .context("failed to write the report")?;

    print_summary(&report, flags);
    if !flags.quiet {
        println!("\nreport written to {}", written.display());
    }
    Ok(())
}

fn client_unless_saved(
    label: &str,
    instance: &InstanceConfig,
    fetch: &FetchConfig,
    saved: Option<&Path>,
) -> anyhow::Result<Option<InstanceClient>> {
    if saved.is_some() {
        return Ok(None);
    }
    let instance = instance.require(label)?;
    let client = InstanceClient::new(label, instance, fetch)
        .with_context(|| format!("cannot query the {label} instance"))?;
    Ok(Some(client))
}

async fn resolve(
    client: Option<&InstanceClient>,
    saved: Option<&Path>,
) -> anyhow::Result<InstanceSnapshot> {
    match (client, saved) {
        (_, Some(path)) => load_snapshot(path),
        (Some(client), None) => client
            .fetch_snapshot()
            .await
            .with_context(|| format!("failed to fetch the {} instance", client.label())),
        (None, None) => anyhow::bail!("no snapshot file or instance client available"),
    }
}

pub fn load_snapshot(path: &Path) -> anyhow::Result<InstanceSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot = InstanceSnapshot::from_json(&raw)
        .with_context(|| format!("invalid snapshot {}", path.display()))?;
    tracing::info!(path = %path.display(), instance = %snapshot.instance, "loaded snapshot");
    Ok(snapshot)
}

/// Command-line values win over configuration.
///
/// A configured path ending in a report extension (or in none) takes the
/// extension of the chosen format; an explicit `--output` is kept as given.
fn destination(args: &ReportArgs, config: &MigConfig) -> (PathBuf, ReportFormat) {
    let format = args.format.unwrap_or(config.report.format);
    if let Some(path) = &args.output {
        return (path.clone(), format);
    }

    let mut path = PathBuf::from(&config.report.output_path);
    let conventional = path.extension().is_none_or(|ext| {
        [ReportFormat::Markdown, ReportFormat::Json]
            .iter()
            .any(|known| ext == known.extension())
    });
    if conventional {
        path.set_extension(format.extension());
    }
    (path, format)
}
