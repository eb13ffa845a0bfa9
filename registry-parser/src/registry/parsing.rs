//! Parsing
//!
//!     The parser turns the flat token stream into a [RegistryConf](crate::registry::ast::RegistryConf).
//!     The grammar is a small finite state machine; [state] names the states,
//!     [engine] holds the transition function and [parser] the facade that drives it.
//!
//! Error Behavior
//!
//!     A token the top-level state cannot place, or a bracket/comment where a value is
//!     expected, is the registry syntax error and aborts the parse. Any other token the
//!     current state has no transition for stops the driver silently: the tree built so
//!     far is returned and the rest of the input is ignored. [parse_with_report] exposes
//!     how many tokens were left, and [ParserOptions::strict] turns the silent stop into
//!     an error.

pub mod engine;
pub mod error;
pub mod parser;
pub mod report;
pub mod state;
pub mod trace;

pub use error::ParseError;
pub use parser::{parse, parse_with_report, Parser, ParserOptions};
pub use report::{Halt, ParseReport};
pub use state::{Resume, State};
pub use trace::{LogTracer, Transition, TransitionTracer};
