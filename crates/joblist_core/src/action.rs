use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A new fetch cycle started for a changed filter/page pair.
    MakeRequest,
    /// Primary request resolved with the requested page's listings.
    DataReceived { jobs: Vec<Value> },
    /// Probe request resolved; reports whether page N+1 has any listings.
    NextPageStatus { has_next_page: bool },
    /// Either request failed for a reason other than cancellation.
    Failed { error: crate::QueryError },
    /// Fallback for placeholder wiring.
    Noop,
}
