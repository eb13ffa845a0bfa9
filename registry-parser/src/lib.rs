//! # registry-parser
//!
//! A parser for corpus registry files: the line-oriented format a corpus indexing engine
//! uses to describe its positional attributes, structures and their nested attributes.
//!
//! File Layout
//!
//!     src/registry
//!       ├── token      Token classifier (keys, values, markers)
//!       ├── lexing     Raw registry text to the flat token stream
//!       ├── ast        The configuration tree (RegistryConf and its nodes)
//!       ├── backend    Persistence collaborator interface
//!       ├── parsing    The state machine driver and the parser facade
//!       ├── formats    Treeviz, tag and registry serializations
//!       ├── loader     File / string loading shortcuts
//!       └── testing    Fluent assertions over configuration trees
//!
//! The parser consumes already-lexed tokens, so callers that own a tokenizer of their own
//! can skip [lexing](registry::lexing) entirely and call
//! [parse](registry::parsing::parse) directly.

pub mod registry;

pub use registry::ast::{
    Attribute, PosAttribute, RegistryConf, RegistryItem, SimpleAttr, Struct, StructItem,
};
pub use registry::backend::{BackendError, MemoryBackend, NullBackend, RegistryBackend};
pub use registry::parsing::{parse, parse_with_report, ParseError, ParseReport, ParserOptions};
