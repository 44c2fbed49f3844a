use std::collections::BTreeMap;

use serde_json::Value;

use joblist_core::{ErrorKind, QueryError};

use crate::SearchConfig;

/// Caller-supplied filter entries (e.g. `description`, `location`,
/// `full_time`), forwarded verbatim as query parameters. Keys and values are
/// opaque to this layer; no validation is performed. A filter entry named
/// `markdown` or `page` overrides the default pair of the same name.
pub type FilterParams = BTreeMap<String, String>;

/// One page of listings from the search endpoint.
#[async_trait::async_trait]
pub trait ListingClient: Send + Sync {
    async fn fetch_page(&self, filters: &FilterParams, page: u32)
        -> Result<Vec<Value>, QueryError>;
}

#[derive(Debug, Clone)]
pub struct HttpListingClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl HttpListingClient {
    pub fn new(config: SearchConfig) -> Result<Self, QueryError> {
        // No request timeout on purpose: the only way a request ends early
        // is through its cycle's cancellation scope.
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { http, config })
    }
}

#[async_trait::async_trait]
impl ListingClient for HttpListingClient {
    async fn fetch_page(
        &self,
        filters: &FilterParams,
        page: u32,
    ) -> Result<Vec<Value>, QueryError> {
        // Filters win over the defaults, like the upstream parameter spread.
        let mut query = filters.clone();
        query
            .entry("markdown".to_string())
            .or_insert_with(|| "true".to_string());
        query
            .entry("page".to_string())
            .or_insert_with(|| page.to_string());

        let response = self
            .http
            .get(self.config.base_url.clone())
            .query(&query)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(QueryError::new(
                ErrorKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        // The body is the jobs sequence itself; records stay opaque.
        response
            .json::<Vec<Value>>()
            .await
            .map_err(|err| QueryError::new(ErrorKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> QueryError {
    if err.is_builder() {
        return QueryError::new(ErrorKind::InvalidUrl, err.to_string());
    }
    QueryError::new(ErrorKind::Network, err.to_string())
}
