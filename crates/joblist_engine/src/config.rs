use url::Url;

/// Engine configuration.
///
/// The endpoint is injected rather than hardcoded so consumers (and tests)
/// can point the client at their own server.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Job-listings search endpoint the GET requests go to.
    pub base_url: Url,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl SearchConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            user_agent: concat!("joblist/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
