use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// An instance lacks its base URL, email or API token.
    #[error(
        "the {section} instance is not configured: set {section}.base_url, {section}.email and \
         {section}.token (or MIGSCOPE_{upper}__BASE_URL, __EMAIL, __TOKEN)",
        upper = .section.to_ascii_uppercase()
    )]
    NotConfigured { section: String },

    #[error("{field} {reason}")]
    InvalidValue { field: String, reason: String },
}
