//! Action sequences as a full fetch cycle would dispatch them.

use joblist_core::{update, Action, ErrorKind, QueryError, QueryState};
use serde_json::json;

#[test]
fn mount_then_data_then_empty_probe() {
    let state = update(QueryState::new(), Action::MakeRequest);
    assert!(state.loading);
    assert!(state.jobs.is_empty());

    let jobs = vec![json!({"id": 1}), json!({"id": 2})];
    let state = update(state, Action::DataReceived { jobs: jobs.clone() });
    assert!(!state.loading);
    assert_eq!(state.jobs, jobs);

    let state = update(
        state,
        Action::NextPageStatus {
            has_next_page: false,
        },
    );
    assert_eq!(state.has_next_page, Some(false));
    assert_eq!(state.jobs, jobs);
}

#[test]
fn probe_can_resolve_before_primary() {
    let state = update(QueryState::new(), Action::MakeRequest);
    let state = update(
        state,
        Action::NextPageStatus {
            has_next_page: true,
        },
    );
    // Probe completion never toggles loading.
    assert!(state.loading);

    let state = update(
        state,
        Action::DataReceived {
            jobs: vec![json!({"id": 9})],
        },
    );
    assert!(!state.loading);
    assert_eq!(state.has_next_page, Some(true));
}

#[test]
fn probe_failure_discards_jobs_delivered_by_primary() {
    // The two requests share one state record, so a late probe failure
    // clobbers a successful primary. Upstream behaviour, kept as is.
    let state = update(QueryState::new(), Action::MakeRequest);
    let state = update(
        state,
        Action::DataReceived {
            jobs: vec![json!({"id": 1})],
        },
    );

    let error = QueryError::new(ErrorKind::Network, "connection reset");
    let state = update(
        state,
        Action::Failed {
            error: error.clone(),
        },
    );

    assert!(state.jobs.is_empty());
    assert_eq!(state.error, Some(error));
    assert!(!state.loading);
}

#[test]
fn new_cycle_clears_error_from_failed_cycle() {
    let state = update(QueryState::new(), Action::MakeRequest);
    let state = update(
        state,
        Action::Failed {
            error: QueryError::new(ErrorKind::HttpStatus(503), "http status 503"),
        },
    );
    assert!(state.error.is_some());

    let state = update(state, Action::MakeRequest);
    assert_eq!(state.error, None);
    assert!(state.loading);
}
