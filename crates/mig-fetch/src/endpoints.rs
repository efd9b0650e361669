//! REST endpoints per entity kind.

use mig_core::EntityKind;

/// Path and fixed query string of the endpoint listing one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub query: Option<&'static str>,
}

/// Endpoint serving records of `kind`.
#[must_use]
pub const fn endpoint(kind: EntityKind) -> Endpoint {
    let (path, query) = match kind {
        EntityKind::Projects => ("/rest/api/3/project", None),
        EntityKind::Priorities => ("/rest/api/3/priority", None),
        EntityKind::Resolutions => ("/rest/api/3/resolution", None),
        EntityKind::Roles => ("/rest/api/3/role", None),
        EntityKind::IssueTypes => ("/rest/api/3/issuetype", None),
        EntityKind::CustomFields => ("/rest/api/3/field", None),
        EntityKind::Statuses => ("/rest/api/3/status", None),
        EntityKind::Filters => (
            "/rest/api/2/filter/search",
            Some("expand=description,owner,jql,sharePermissions,editPermissions"),
        ),
        EntityKind::Dashboards => ("/rest/api/2/dashboard", None),
    };
    Endpoint { path, query }
}

impl Endpoint {
    /// Full URL under `base_url`, without paging parameters.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        match self.query {
            Some(query) => format!("{base_url}{}?{query}", self.path),
            None => format!("{base_url}{}", self.path),
        }
    }

    /// Full URL for the page starting at `start_at`.
    #[must_use]
    pub fn page_url(&self, base_url: &str, start_at: u64, max_results: u32) -> String {
        let url = self.url(base_url);
        let separator = if self.query.is_some() { '&' } else { '?' };
        format!("{url}{separator}startAt={start_at}&maxResults={max_results}")
    }
}
