use std::sync::{Arc, Mutex};

use joblist_core::{update, Action, QueryState};
use joblist_logging::{fetch_debug, fetch_info, fetch_warn};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::{FilterParams, ListingClient};

#[derive(Debug, Clone, Copy)]
enum RequestRole {
    /// Fetch for the requested page; resolves into `DataReceived`.
    Primary,
    /// Fetch for page N+1, used only to decide `has_next_page`.
    Probe,
}

impl RequestRole {
    fn label(self) -> &'static str {
        match self {
            RequestRole::Primary => "primary",
            RequestRole::Probe => "probe",
        }
    }
}

struct Shared {
    state: QueryState,
    /// Monotonic fetch-cycle counter; a completion whose cycle no longer
    /// matches is dropped without touching the state.
    cycle: u64,
    inputs: Option<(FilterParams, u32)>,
    /// Cancellation scope covering both of the current cycle's requests.
    cancel: CancellationToken,
}

/// Drives fetch cycles against a [`ListingClient`] and publishes the
/// resulting [`QueryState`] through a watch channel.
///
/// Each cycle runs two concurrent GET requests: the primary fetch for the
/// requested page and a probe for the page after it. The two race; every
/// completion goes through the pure reducer under one lock. A new
/// [`set_query`](Self::set_query) call or dropping the coordinator cancels
/// the cycle's scope, and a cancelled request emits nothing.
pub struct QueryCoordinator {
    client: Arc<dyn ListingClient>,
    shared: Arc<Mutex<Shared>>,
    state_tx: watch::Sender<QueryState>,
}

impl QueryCoordinator {
    /// Creates a coordinator in the fresh-mount state (`loading: true`).
    /// No requests go out until the first [`set_query`](Self::set_query).
    pub fn new(client: Arc<dyn ListingClient>) -> Self {
        let state = QueryState::new();
        let (state_tx, _) = watch::channel(state.clone());
        Self {
            client,
            shared: Arc::new(Mutex::new(Shared {
                state,
                cycle: 0,
                inputs: None,
                cancel: CancellationToken::new(),
            })),
            state_tx,
        }
    }

    /// Starts a fetch cycle for the given filters and page.
    ///
    /// Inputs equal to the previous call are a no-op. Changed inputs cancel
    /// the previous cycle's requests, reset the state to loading before any
    /// network I/O happens, and spawn the primary and probe requests on the
    /// current tokio runtime.
    ///
    /// Must be called from within a tokio runtime context.
    pub fn set_query(&self, filters: FilterParams, page: u32) {
        let inputs = (filters, page);
        let (cycle, scope) = {
            let mut shared = self.shared.lock().unwrap();
            if shared.inputs.as_ref() == Some(&inputs) {
                fetch_debug!("set_query ignored, inputs unchanged (page={})", inputs.1);
                return;
            }
            // Tear down the old scope before the new cycle becomes
            // observable, so a late completion cannot land in it.
            shared.cancel.cancel();
            shared.cancel = CancellationToken::new();
            shared.cycle += 1;
            shared.inputs = Some(inputs.clone());
            shared.state = update(shared.state.clone(), Action::MakeRequest);
            // send_replace keeps the watch value current even while nobody
            // is subscribed, so a late subscriber starts from the live state.
            let _ = self.state_tx.send_replace(shared.state.clone());
            (shared.cycle, shared.cancel.clone())
        };

        let (filters, page) = inputs;
        fetch_info!(
            "cycle {} started: page={} filter_count={}",
            cycle,
            page,
            filters.len()
        );

        self.spawn_request(
            cycle,
            scope.clone(),
            filters.clone(),
            page,
            RequestRole::Primary,
        );
        self.spawn_request(cycle, scope, filters, page + 1, RequestRole::Probe);
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> QueryState {
        self.shared.lock().unwrap().state.clone()
    }

    /// Receiver that observes every state change, starting from the current
    /// value.
    pub fn subscribe(&self) -> watch::Receiver<QueryState> {
        self.state_tx.subscribe()
    }

    fn spawn_request(
        &self,
        cycle: u64,
        scope: CancellationToken,
        filters: FilterParams,
        page: u32,
        role: RequestRole,
    ) {
        let client = Arc::clone(&self.client);
        let shared = Arc::clone(&self.shared);
        let state_tx = self.state_tx.clone();

        tokio::spawn(async move {
            let result = tokio::select! {
                _ = scope.cancelled() => {
                    fetch_debug!("cycle {} {} request cancelled (page={})", cycle, role.label(), page);
                    return;
                }
                result = client.fetch_page(&filters, page) => result,
            };

            let action = match result {
                Ok(jobs) => match role {
                    RequestRole::Primary => Action::DataReceived { jobs },
                    RequestRole::Probe => Action::NextPageStatus {
                        has_next_page: !jobs.is_empty(),
                    },
                },
                Err(error) => {
                    fetch_warn!(
                        "cycle {} {} request failed (page={}): {}",
                        cycle,
                        role.label(),
                        page,
                        error
                    );
                    Action::Failed { error }
                }
            };

            let mut shared = shared.lock().unwrap();
            // The completion may have won the select race against a
            // cancellation that already started the next cycle.
            if shared.cycle != cycle {
                fetch_debug!("cycle {} {} completion dropped, superseded", cycle, role.label());
                return;
            }
            shared.state = update(shared.state.clone(), action);
            let _ = state_tx.send_replace(shared.state.clone());
        });
    }
}

impl Drop for QueryCoordinator {
    fn drop(&mut self) {
        // Consumer went away; stop whatever is still in flight.
        if let Ok(shared) = self.shared.lock() {
            shared.cancel.cancel();
        }
    }
}
