//! What a parse consumed, and where it stopped

use super::state::State;
use crate::registry::ast::RegistryConf;

/// The token at which the driver found no transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Halt {
    pub state: State,
    pub index: usize,
    pub token: String,
}

/// A parsed tree plus consumption diagnostics.
///
/// The tree is exactly what [parse](super::parse) returns for the same input; the report
/// only adds the information needed to tell a fully consumed input from a truncated one.
#[derive(Debug)]
pub struct ParseReport<B> {
    pub conf: RegistryConf<B>,
    pub total: usize,
    pub consumed: usize,
    pub final_state: State,
    pub halt: Option<Halt>,
}

impl<B> ParseReport<B> {
    pub fn unconsumed(&self) -> usize {
        self.total - self.consumed
    }

    /// The driver stopped before the end of the token stream.
    pub fn is_truncated(&self) -> bool {
        self.halt.is_some()
    }

    /// Every token was consumed and no statement was left open.
    pub fn is_complete(&self) -> bool {
        self.halt.is_none() && self.final_state.is_resting()
    }

    pub fn into_conf(self) -> RegistryConf<B> {
        self.conf
    }
}
