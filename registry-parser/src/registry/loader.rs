//! Registry loading utilities
//!
//! `RegistryLoader` reads registry text from a file or a string and runs the tokenizer
//! and the parser on it. It's used by both the CLI and tests.
//!
//! # Example
//!
//! ```rust
//! use registry_parser::registry::loader::RegistryLoader;
//! use registry_parser::NullBackend;
//!
//! let conf = RegistryLoader::from_path("/corpora/registry/susanne")?
//!     .parse("susanne", None, NullBackend)?;
//! ```

use crate::registry::ast::RegistryConf;
use crate::registry::backend::RegistryBackend;
use crate::registry::lexing::{tokenize, LexError};
use crate::registry::parsing::{parse_with_report, ParseError, ParseReport, ParserOptions};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading registries
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Lexing error: {0}")]
    Lex(#[from] LexError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Registry source with tokenize / parse shortcuts
pub struct RegistryLoader {
    source: String,
}

impl RegistryLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(RegistryLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        RegistryLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The parser input for this source
    pub fn tokenize(&self) -> Result<Vec<String>, LoaderError> {
        Ok(tokenize(&self.source)?)
    }

    /// Tokenize and parse with default options
    pub fn parse<B: RegistryBackend>(
        &self,
        corpus_id: &str,
        variant: Option<&str>,
        backend: B,
    ) -> Result<RegistryConf<B>, LoaderError> {
        Ok(self
            .parse_with_report(corpus_id, variant, backend, ParserOptions::default())?
            .into_conf())
    }

    /// Tokenize and parse, keeping consumption diagnostics
    pub fn parse_with_report<B: RegistryBackend>(
        &self,
        corpus_id: &str,
        variant: Option<&str>,
        backend: B,
        options: ParserOptions,
    ) -> Result<ParseReport<B>, LoaderError> {
        let tokens = self.tokenize()?;
        Ok(parse_with_report(
            corpus_id, variant, backend, &tokens, options,
        )?)
    }
}
