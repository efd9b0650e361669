use anyhow::Context;
use mig_config::MigConfig;

/// Load `.env`, resolve external secrets and build the layered config.
pub async fn load_config() -> anyhow::Result<MigConfig> {
    dotenvy::dotenv().ok();

    let env_overrides = match mig_secrets::load_env_overrides().await {
        Ok(overrides) => overrides.into_values(),
        Err(error) => {
            if is_ci() {
                return Err(anyhow::anyhow!(
                    "failed to load configured secret backend in CI: {error}"
                ));
            }

            tracing::warn!(%error, "failed to load external secrets; continuing with local config");
            Vec::new()
        }
    };

    MigConfig::load_with_env_overrides(&env_overrides).context("failed to load configuration")
}

fn is_ci() -> bool {
    std::env::var("CI")
        .map(|value| value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
