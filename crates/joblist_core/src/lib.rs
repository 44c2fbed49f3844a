//! Joblist core: pure query state machine.
mod action;
mod error;
mod state;
mod update;

pub use action::Action;
pub use error::{ErrorKind, QueryError};
pub use state::QueryState;
pub use update::update;
