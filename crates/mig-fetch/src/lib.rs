//! # mig-fetch
//!
//! REST client that snapshots the configuration of one issue tracker
//! instance.
//!
//! Every entity kind is fetched with a plain `GET` using basic authentication
//! (account email + API token) and `Accept: application/json`. Filters and
//! dashboards are paginated with `startAt`/`maxResults`; everything else is a
//! single request. Requests run one after another. Any failure aborts the
//! snapshot; nothing is retried.

mod body;
mod endpoints;
mod error;
mod http;

pub use endpoints::{Endpoint, endpoint};
pub use error::FetchError;

use mig_config::{FetchConfig, InstanceConfig};
use mig_core::entities::{Dashboard, Filter};
use mig_core::{EntityKind, InstanceSnapshot};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;

use crate::body::{DashboardPage, FilterPage, Page, decode_list};
use crate::http::read_body;

const USER_AGENT: &str = concat!("migscope/", env!("CARGO_PKG_VERSION"));

/// HTTP client bound to one instance and its credentials.
pub struct InstanceClient {
    http: reqwest::Client,
    label: String,
    base_url: String,
    email: String,
    token: String,
    page_size: u32,
}

impl std::fmt::Debug for InstanceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceClient")
            .field("label", &self.label)
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("token", &"[redacted]")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl InstanceClient {
    /// Create a client for the instance described by `instance`.
    ///
    /// `label` names the instance in logs and errors (`source`, `target`).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::NotConfigured`] if the instance lacks a base URL
    /// or credentials, and [`FetchError::Http`] if the HTTP client fails to
    /// build.
    pub fn new(
        label: &str,
        instance: &InstanceConfig,
        fetch: &FetchConfig,
    ) -> Result<Self, FetchError> {
        if !instance.is_configured() {
            return Err(FetchError::NotConfigured(label.to_string()));
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(fetch.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            label: label.to_string(),
            base_url: instance.base_url().to_string(),
            email: instance.email.clone(),
            token: instance.token.clone(),
            page_size: fetch.page_size.max(1),
        })
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every entity kind, in [`EntityKind::ALL`] order.
    ///
    /// # Errors
    ///
    /// Returns the first [`FetchError`] encountered; the partial snapshot is
    /// discarded.
    pub async fn fetch_snapshot(&self) -> Result<InstanceSnapshot, FetchError> {
        let mut snapshot = InstanceSnapshot::new(self.base_url.as_str());
        for kind in EntityKind::ALL {
            match kind {
                EntityKind::Projects => snapshot.projects = self.fetch_list(kind).await?,
                EntityKind::Priorities => snapshot.priorities = self.fetch_list(kind).await?,
                EntityKind::Resolutions => snapshot.resolutions = self.fetch_list(kind).await?,
                EntityKind::Roles => snapshot.roles = self.fetch_list(kind).await?,
                EntityKind::IssueTypes => snapshot.issue_types = self.fetch_list(kind).await?,
                EntityKind::CustomFields => {
                    snapshot.custom_fields = self.fetch_list(kind).await?;
                }
                EntityKind::Statuses => snapshot.statuses = self.fetch_list(kind).await?,
                EntityKind::Filters => snapshot.filters = self.fetch_filters().await?,
                EntityKind::Dashboards => snapshot.set_dashboards(self.fetch_dashboards().await?),
            }
            tracing::info!(
                instance = %self.label,
                kind = %kind,
                count = snapshot.count(kind),
                "fetched records"
            );
        }
        Ok(snapshot)
    }

    /// Fetch every saved filter, page by page.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if any page request fails or cannot be parsed.
    pub async fn fetch_filters(&self) -> Result<Vec<Filter>, FetchError> {
        self.fetch_pages::<FilterPage>(EntityKind::Filters).await
    }

    /// Fetch every dashboard, page by page, exactly as the instance lists
    /// them. [`InstanceSnapshot::set_dashboards`] drops the default one.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if any page request fails or cannot be parsed.
    pub async fn fetch_dashboards(&self) -> Result<Vec<Dashboard>, FetchError> {
        self.fetch_pages::<DashboardPage>(EntityKind::Dashboards).await
    }

    /// Fetch a non-paginated list endpoint.
    async fn fetch_list<T: DeserializeOwned>(&self, kind: EntityKind) -> Result<Vec<T>, FetchError> {
        let url = endpoint(kind).url(&self.base_url);
        let body = self.get_bytes(&url).await?;
        decode_list(&body).map_err(|reason| FetchError::Parse { url, reason })
    }

    /// Walk a paginated endpoint until the last page, concatenating records
    /// in page order.
    ///
    /// The next `startAt` follows the records actually received, since the
    /// instance may cap `maxResults` below the requested page size.
    async fn fetch_pages<P: Page>(&self, kind: EntityKind) -> Result<Vec<P::Item>, FetchError> {
        let endpoint = endpoint(kind);
        let mut records = Vec::new();
        let mut start_at = 0u64;

        loop {
            let url = endpoint.page_url(&self.base_url, start_at, self.page_size);
            tracing::debug!(instance = %self.label, kind = %kind, start_at, "requesting page");

            let body = self.get_bytes(&url).await?;
            let page: P = serde_json::from_slice(&body).map_err(|e| FetchError::Parse {
                url: url.clone(),
                reason: e.to_string(),
            })?;
            let (items, signal) = page.into_parts();
            let received = items.len();
            records.extend(items);

            if signal.is_last_page(start_at, received) {
                break;
            }
            start_at += received as u64;
        }

        Ok(records)
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let request = self
            .http
            .get(url)
            .basic_auth(&self.email, Some(&self.token))
            .header(ACCEPT, "application/json");
        read_body(request.send().await?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> InstanceConfig {
        InstanceConfig {
            base_url: "https://source.example.net/".into(),
            email: "admin@example.com".into(),
            token: "api-token".into(),
        }
    }

    #[test]
    fn rejects_unconfigured_instance() {
        let result = InstanceClient::new("target", &InstanceConfig::default(), &FetchConfig::default());
        assert!(matches!(result, Err(FetchError::NotConfigured(ref label)) if label == "target"));
    }

    #[test]
    fn normalizes_base_url() {
        let client = InstanceClient::new("source", &configured(), &FetchConfig::default()).unwrap();
        assert_eq!(client.base_url(), "https://source.example.net");
        assert_eq!(client.label(), "source");
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let fetch = FetchConfig {
            page_size: 0,
            ..FetchConfig::default()
        };
        let client = InstanceClient::new("source", &configured(), &fetch).unwrap();
        assert_eq!(client.page_size, 1);
    }

    #[test]
    fn debug_output_hides_token() {
        let client = InstanceClient::new("source", &configured(), &FetchConfig::default()).unwrap();
        let debug = format!("{client:?}");
        assert!(debug.contains("admin@example.com"));
        assert!(debug.contains("[redacted]"));
        assert!(!debug.contains("api-token"));
    }

    #[tokio::test]
    #[ignore] // requires a live instance configured through MIGSCOPE_SOURCE__*
    async fn live_fetch_snapshot() {
        let config = mig_config::MigConfig::load().expect("config");
        let client = InstanceClient::new("source", &config.source, &config.fetch).expect("client");
        let snapshot = client.fetch_snapshot().await.expect("snapshot");
        for kind in EntityKind::ALL {
            println!("{kind}: {}", snapshot.count(kind));
        }
    }
}
