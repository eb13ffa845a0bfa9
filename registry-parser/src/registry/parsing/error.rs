//! Error types for parsing

use super::state::State;
use crate::registry::backend::BackendError;
use thiserror::Error;

/// Errors that can occur while parsing a token stream
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The registry syntax error: a token the grammar explicitly rejects
    #[error("in state {state} cannot process: {token} (token #{index})")]
    Syntax {
        state: State,
        index: usize,
        token: String,
    },
    /// No transition matched; only raised in strict mode
    #[error(
        "in state {state} no transition for: {token} (token #{index}), {unconsumed} token(s) left unparsed"
    )]
    Truncated {
        state: State,
        index: usize,
        token: String,
        unconsumed: usize,
    },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ParseError {
    /// Index of the offending token, if the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            ParseError::Syntax { index, .. } | ParseError::Truncated { index, .. } => Some(*index),
            ParseError::Backend(_) => None,
        }
    }
}
