use crate::{Action, QueryState};

/// Pure update function: applies an action to the state and returns the next
/// state. Never mutates in place, never does I/O.
///
/// Field ownership per action: `MakeRequest` is the only full reset;
/// `DataReceived` and `Failed` own `loading`/`jobs`/`error`;
/// `NextPageStatus` owns only `has_next_page`. Because the primary and probe
/// requests race, a `Failed` from either one clears `jobs` even if the other
/// already delivered them; both requests write to one shared record and the
/// last writer wins, as in the upstream implementation.
pub fn update(state: QueryState, action: Action) -> QueryState {
    match action {
        Action::MakeRequest => QueryState {
            jobs: Vec::new(),
            loading: true,
            has_next_page: None,
            error: None,
        },
        Action::DataReceived { jobs } => QueryState {
            jobs,
            loading: false,
            ..state
        },
        Action::NextPageStatus { has_next_page } => QueryState {
            has_next_page: Some(has_next_page),
            ..state
        },
        Action::Failed { error } => QueryState {
            jobs: Vec::new(),
            loading: false,
            error: Some(error),
            ..state
        },
        Action::Noop => state,
    }
}
