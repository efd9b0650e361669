//! Response body shapes.
//!
//! List endpoints return either a bare JSON array or an object wrapping the
//! records in `values`. Paginated endpoints return a page object whose list
//! field depends on the endpoint, plus the paging signals.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use mig_core::entities::{Dashboard, Filter};

/// Decode a list endpoint body into records.
pub fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, String> {
    let value: Value = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    let items = match value {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut map) => map
            .remove("values")
            .ok_or_else(|| "object body has no `values` list".to_string())?,
        other => return Err(format!("expected a list, got {}", type_name(&other))),
    };
    serde_json::from_value(items).map_err(|e| e.to_string())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Paging signals carried by every page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSignal {
    #[serde(default)]
    pub is_last: Option<bool>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl PageSignal {
    /// Whether the page starting at `start_at` with `received` records is
    /// the last one.
    ///
    /// `isLast` wins when present; otherwise `total` decides; with neither,
    /// the first page is the only page. An empty page always ends paging.
    #[must_use]
    pub fn is_last_page(self, start_at: u64, received: usize) -> bool {
        if received == 0 {
            return true;
        }
        if let Some(is_last) = self.is_last {
            return is_last;
        }
        match self.total {
            Some(total) => start_at + received as u64 >= total,
            None => true,
        }
    }
}

/// A page of records from a paginated endpoint.
pub trait Page: DeserializeOwned {
    type Item;

    fn into_parts(self) -> (Vec<Self::Item>, PageSignal);
}

#[derive(Debug, Deserialize)]
pub struct FilterPage {
    #[serde(default)]
    values: Vec<Filter>,
    #[serde(flatten)]
    signal: PageSignal,
}

impl Page for FilterPage {
    type Item = Filter;

    fn into_parts(self) -> (Vec<Filter>, PageSignal) {
        (self.values, self.signal)
    }
}

#[derive(Debug, Deserialize)]
pub struct DashboardPage {
    #[serde(default)]
    dashboards: Vec<Dashboard>,
    #[serde(flatten)]
    signal: PageSignal,
}

impl Page for DashboardPage {
    type Item = Dashboard;

    fn into_parts(self) -> (Vec<Dashboard>, PageSignal) {
        (self.dashboards, self.signal)
    }
}
