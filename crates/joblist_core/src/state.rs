use serde_json::Value;

use crate::QueryError;

/// Shared query state, replaced wholesale on every reduction.
///
/// `jobs` holds the API response payload verbatim; this layer never looks
/// inside the individual records.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub jobs: Vec<Value>,
    pub loading: bool,
    /// `None` until the probe request for the next page has resolved.
    pub has_next_page: Option<bool>,
    pub error: Option<QueryError>,
}

impl QueryState {
    /// Fresh-mount state: loading, no jobs, probe unresolved.
    pub fn new() -> Self {
        Self {
            jobs: Vec::new(),
            loading: true,
            has_next_page: None,
            error: None,
        }
    }
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new()
    }
}
