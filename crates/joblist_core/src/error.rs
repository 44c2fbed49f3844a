use std::fmt;

use thiserror::Error;

/// Failure surfaced into `QueryState::error` by a fetch cycle.
///
/// Cancellation has no representation here: a cancelled request emits no
/// action at all, so it never reaches the state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct QueryError {
    pub kind: ErrorKind,
    pub message: String,
}

impl QueryError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUrl,
    HttpStatus(u16),
    Network,
    Decode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidUrl => write!(f, "invalid url"),
            ErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            ErrorKind::Network => write!(f, "network error"),
            ErrorKind::Decode => write!(f, "decode error"),
        }
    }
}
