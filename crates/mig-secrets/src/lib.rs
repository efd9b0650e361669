//! # mig-secrets
//!
//! External secret store integration for migscope.
//!
//! Instance API tokens should not live in TOML files. When a backend is
//! selected with `MIGSCOPE_SECRETS__BACKEND`, every secret whose key starts
//! with `MIGSCOPE_` (e.g. `MIGSCOPE_SOURCE__TOKEN`) is returned as a config
//! override and layered below the process environment.
//!
//! Only [Infisical](https://infisical.com) universal auth is supported:
//!
//! | variable | default |
//! |---|---|
//! | `MIGSCOPE_INFISICAL__CLIENT_ID` | required |
//! | `MIGSCOPE_INFISICAL__CLIENT_SECRET` | required |
//! | `MIGSCOPE_INFISICAL__PROJECT_ID` | required |
//! | `MIGSCOPE_INFISICAL__ENVIRONMENT` | required |
//! | `MIGSCOPE_INFISICAL__BASE_URL` | `https://app.infisical.com` |
//! | `MIGSCOPE_INFISICAL__PATH` | `/` |

use infisical::{AuthMethod, Client, secrets::ListSecretsRequest};
use thiserror::Error;

const BACKEND_VAR: &str = "MIGSCOPE_SECRETS__BACKEND";
const OVERRIDE_PREFIX: &str = "MIGSCOPE_";
const DEFAULT_INFISICAL_URL: &str = "https://app.infisical.com";

/// Result of resolving external secrets.
#[derive(Debug, Clone)]
pub enum SecretOverrides {
    Disabled,
    Values(Vec<(String, String)>),
}

impl SecretOverrides {
    /// Override pairs, empty when no backend is configured.
    #[must_use]
    pub fn into_values(self) -> Vec<(String, String)> {
        match self {
            Self::Disabled => Vec::new(),
            Self::Values(values) => values,
        }
    }
}

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("unsupported secrets backend '{0}' (expected 'none' or 'infisical')")]
    UnsupportedBackend(String),
    #[error("{0} must be set when the infisical backend is selected")]
    MissingSetting(&'static str),
    #[error("infisical error: {0}")]
    Infisical(#[from] infisical::InfisicalError),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Backend {
    None,
    Infisical,
}

impl Backend {
    fn parse(raw: Option<&str>) -> Result<Self, SecretError> {
        let value = raw.unwrap_or_default().trim().to_ascii_lowercase();
        match value.as_str() {
            "" | "none" | "off" | "disabled" => Ok(Self::None),
            "infisical" => Ok(Self::Infisical),
            _ => Err(SecretError::UnsupportedBackend(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct InfisicalSettings {
    base_url: String,
    client_id: String,
    client_secret: String,
    project_id: String,
    environment: String,
    path: String,
}

impl InfisicalSettings {
    /// Read settings through `get`, which returns a variable's value by name.
    fn read(get: impl Fn(&str) -> Option<String>) -> Result<Self, SecretError> {
        let required = |name: &'static str| {
            get(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(SecretError::MissingSetting(name))
        };

        Ok(Self {
            client_id: required("MIGSCOPE_INFISICAL__CLIENT_ID")?,
            client_secret: required("MIGSCOPE_INFISICAL__CLIENT_SECRET")?,
            project_id: required("MIGSCOPE_INFISICAL__PROJECT_ID")?,
            environment: required("MIGSCOPE_INFISICAL__ENVIRONMENT")?,
            base_url: get("MIGSCOPE_INFISICAL__BASE_URL")
                .unwrap_or_else(|| DEFAULT_INFISICAL_URL.to_string()),
            path: get("MIGSCOPE_INFISICAL__PATH").unwrap_or_else(|| "/".to_string()),
        })
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Load secret key/value overrides from the configured external backend.
///
/// Keys are exact environment variable names (e.g. `MIGSCOPE_TARGET__TOKEN`),
/// returned sorted by key. Blank secrets are skipped.
///
/// # Errors
///
/// Returns [`SecretError`] when the backend name is unknown, a required
/// setting is missing or the secret store rejects the request.
pub async fn load_env_overrides() -> Result<SecretOverrides, SecretError> {
    match Backend::parse(env_var(BACKEND_VAR).as_deref())? {
        Backend::None => Ok(SecretOverrides::Disabled),
        Backend::Infisical => {
            let settings = InfisicalSettings::read(env_var)?;
            let secrets = fetch_infisical(&settings).await?;
            Ok(SecretOverrides::Values(select_overrides(secrets)))
        }
    }
}

async fn fetch_infisical(
    settings: &InfisicalSettings,
) -> Result<Vec<(String, String)>, SecretError> {
    let mut client = Client::builder()
        .base_url(&settings.base_url)
        .build()
        .await?;
    client
        .login(AuthMethod::new_universal_auth(
            &settings.client_id,
            &settings.client_secret,
        ))
        .await?;

    let request = ListSecretsRequest::builder(&settings.project_id, &settings.environment)
        .path(&settings.path)
        .recursive(true)
        .expand_secret_references(true)
        .build();

    Ok(client
        .secrets()
        .list(request)
        .await?
        .into_iter()
        .map(|secret| (secret.secret_key, secret.secret_value))
        .collect())
}

fn select_overrides(secrets: impl IntoIterator<Item = (String, String)>) -> Vec<(String, String)> {
    let mut values: Vec<_> = secrets
        .into_iter()
        .filter(|(key, value)| {
            key.starts_with(OVERRIDE_PREFIX) && key != BACKEND_VAR && !value.trim().is_empty()
        })
        .collect();
    values.sort_by(|a, b| a.0.cmp(&b.0));
    values
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn backend_names() {
        assert_eq!(Backend::parse(None).unwrap(), Backend::None);
        assert_eq!(Backend::parse(Some(" Off ")).unwrap(), Backend::None);
        assert_eq!(Backend::parse(Some("Infisical")).unwrap(), Backend::Infisical);
        assert!(matches!(
            Backend::parse(Some("vault")),
            Err(SecretError::UnsupportedBackend(ref v)) if v == "vault"
        ));
    }

    #[test]
    fn backend_is_read_from_environment() {
        figment::Jail::expect_with(|jail| {
            assert_eq!(Backend::parse(env_var(BACKEND_VAR).as_deref()).unwrap(), Backend::None);
            jail.set_env(BACKEND_VAR, "infisical");
            assert_eq!(
                Backend::parse(env_var(BACKEND_VAR).as_deref()).unwrap(),
                Backend::Infisical
            );
            Ok(())
        });
    }

    #[test]
    fn infisical_settings_apply_defaults() {
        let settings = InfisicalSettings::read(lookup(&[
            ("MIGSCOPE_INFISICAL__CLIENT_ID", "id"),
            ("MIGSCOPE_INFISICAL__CLIENT_SECRET", "secret"),
            ("MIGSCOPE_INFISICAL__PROJECT_ID", "proj"),
            ("MIGSCOPE_INFISICAL__ENVIRONMENT", "prod"),
        ]))
        .unwrap();
        assert_eq!(settings.base_url, DEFAULT_INFISICAL_URL);
        assert_eq!(settings.path, "/");
        assert_eq!(settings.environment, "prod");
    }

    #[test]
    fn infisical_settings_name_missing_variable() {
        let err = InfisicalSettings::read(lookup(&[
            ("MIGSCOPE_INFISICAL__CLIENT_ID", "id"),
            ("MIGSCOPE_INFISICAL__CLIENT_SECRET", " "),
        ]))
        .unwrap_err();
        assert!(matches!(
            err,
            SecretError::MissingSetting("MIGSCOPE_INFISICAL__CLIENT_SECRET")
        ));
    }

    #[test]
    fn overrides_keep_prefixed_non_blank_keys_sorted() {
        let values = select_overrides([
            ("MIGSCOPE_TARGET__TOKEN".to_string(), "t".to_string()),
            ("UNRELATED".to_string(), "x".to_string()),
            ("MIGSCOPE_SOURCE__EMAIL".to_string(), String::new()),
            ("MIGSCOPE_SECRETS__BACKEND".to_string(), "infisical".to_string()),
            ("MIGSCOPE_SOURCE__TOKEN".to_string(), "s".to_string()),
        ]);
        assert_eq!(
            values,
            vec![
                ("MIGSCOPE_SOURCE__TOKEN".to_string(), "s".to_string()),
                ("MIGSCOPE_TARGET__TOKEN".to_string(), "t".to_string()),
            ]
        );
    }

    #[test]
    fn disabled_overrides_are_empty() {
        assert!(SecretOverrides::Disabled.into_values().is_empty());
    }
}
