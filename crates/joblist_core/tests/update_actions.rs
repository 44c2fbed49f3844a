use std::sync::Once;

use joblist_core::{update, Action, ErrorKind, QueryError, QueryState};
use serde_json::json;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(joblist_logging::initialize_for_tests);
}

fn settled_state() -> QueryState {
    QueryState {
        jobs: vec![json!({"id": 1}), json!({"id": 2})],
        loading: false,
        has_next_page: Some(true),
        error: Some(QueryError::new(ErrorKind::Network, "stale")),
    }
}

#[test]
fn fresh_state_is_loading_with_no_jobs() {
    init_logging();
    let state = QueryState::new();

    assert!(state.loading);
    assert!(state.jobs.is_empty());
    assert_eq!(state.has_next_page, None);
    assert_eq!(state.error, None);
}

#[test]
fn make_request_resets_regardless_of_prior_state() {
    init_logging();
    let next = update(settled_state(), Action::MakeRequest);

    // Nothing from the previous cycle survives.
    assert_eq!(next, QueryState::new());
}

#[test]
fn data_received_stops_loading_and_keeps_probe_result() {
    init_logging();
    let state = QueryState {
        has_next_page: Some(false),
        ..QueryState::new()
    };
    let jobs = vec![json!({"id": 7, "title": "Rust Engineer"})];

    let next = update(state, Action::DataReceived { jobs: jobs.clone() });

    assert!(!next.loading);
    assert_eq!(next.jobs, jobs);
    assert_eq!(next.has_next_page, Some(false));
    assert_eq!(next.error, None);
}

#[test]
fn next_page_status_touches_only_that_field() {
    init_logging();
    let state = settled_state();
    let expected = QueryState {
        has_next_page: Some(false),
        ..state.clone()
    };

    let next = update(
        state,
        Action::NextPageStatus {
            has_next_page: false,
        },
    );

    assert_eq!(next, expected);
}

#[test]
fn failed_clears_jobs_and_keeps_probe_result() {
    init_logging();
    let state = QueryState {
        jobs: vec![json!({"id": 1})],
        loading: true,
        has_next_page: Some(true),
        error: None,
    };
    let error = QueryError::new(ErrorKind::HttpStatus(500), "http status 500");

    let next = update(
        state,
        Action::Failed {
            error: error.clone(),
        },
    );

    assert!(!next.loading);
    assert!(next.jobs.is_empty());
    assert_eq!(next.error, Some(error));
    assert_eq!(next.has_next_page, Some(true));
}

#[test]
fn update_is_deterministic_for_equal_inputs() {
    init_logging();
    let state = settled_state();
    let action = Action::DataReceived {
        jobs: vec![json!({"id": 3})],
    };

    let first = update(state.clone(), action.clone());
    let second = update(state, action);

    assert_eq!(first, second);
}
