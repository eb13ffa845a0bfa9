//! Parser facade
//!
//! Owns the token stream and the driver, runs the driver to completion and packages the
//! result. The driver stops at the end of the stream or at the first token for which the
//! current state has no transition; in both cases the in-progress top-level node is
//! finalized into the root before it is returned.

use super::engine::Driver;
use super::error::ParseError;
use super::report::{Halt, ParseReport};
use super::trace::{LogTracer, Transition, TransitionTracer};
use crate::registry::ast::RegistryConf;
use crate::registry::backend::RegistryBackend;

/// Knobs for a parse run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Turn a halt on an unmatched token into [ParseError::Truncated] instead of returning
    /// the partial tree.
    pub strict: bool,
    /// Emit a `tracing` event per transition.
    pub trace: bool,
}

pub struct Parser<'a, S, B> {
    tokens: &'a [S],
    driver: Driver<B>,
    options: ParserOptions,
    tracer: Option<Box<dyn TransitionTracer + 'a>>,
}

impl<'a, S: AsRef<str>, B: RegistryBackend> Parser<'a, S, B> {
    pub fn new(corpus_id: &str, variant: Option<&str>, backend: B, tokens: &'a [S]) -> Self {
        let root = RegistryConf::new(corpus_id, variant.map(str::to_string), backend);
        Self {
            tokens,
            driver: Driver::new(root),
            options: ParserOptions::default(),
            tracer: None,
        }
    }

    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Report every transition to `tracer`, regardless of [ParserOptions::trace].
    pub fn with_tracer(mut self, tracer: impl TransitionTracer + 'a) -> Self {
        self.tracer = Some(Box::new(tracer));
        self
    }

    pub fn run(mut self) -> Result<ParseReport<B>, ParseError> {
        if self.tracer.is_none() && self.options.trace {
            self.tracer = Some(Box::new(LogTracer));
        }

        let total = self.tokens.len();
        let mut consumed = 0;
        let mut halt = None;

        for (index, token) in self.tokens.iter().enumerate() {
            let token = token.as_ref();
            let from = self.driver.state();
            let outcome = self.driver.feed(index, token);

            if let Some(tracer) = self.tracer.as_mut() {
                tracer.transition(&Transition {
                    index,
                    token,
                    from,
                    to: outcome.as_ref().ok().copied().flatten(),
                    node: self.driver.node_type(),
                });
            }

            match outcome? {
                Some(_) => consumed += 1,
                None => {
                    halt = Some(Halt {
                        state: from,
                        index,
                        token: token.to_string(),
                    });
                    break;
                }
            }
        }

        if let Some(halt) = &halt {
            if self.options.strict {
                return Err(ParseError::Truncated {
                    state: halt.state,
                    index: halt.index,
                    token: halt.token.clone(),
                    unconsumed: total - consumed,
                });
            }
            tracing::warn!(
                state = halt.state.label(),
                index = halt.index,
                token = halt.token.as_str(),
                unconsumed = total - consumed,
                "no transition matched; remaining input ignored"
            );
        }

        let (conf, final_state) = self.driver.finish()?;
        tracing::debug!(
            corpus_id = conf.corpus_id.as_str(),
            items = conf.len(),
            consumed,
            total,
            "registry parsed"
        );

        Ok(ParseReport {
            conf,
            total,
            consumed,
            final_state,
            halt,
        })
    }
}

/// Parse a token stream into a [RegistryConf].
///
/// Fails only with the registry syntax error or a backend error; an input the driver
/// cannot follow to the end yields the tree built so far.
pub fn parse<S, B>(
    corpus_id: &str,
    variant: Option<&str>,
    backend: B,
    tokens: &[S],
) -> Result<RegistryConf<B>, ParseError>
where
    S: AsRef<str>,
    B: RegistryBackend,
{
    parse_with_report(corpus_id, variant, backend, tokens, ParserOptions::default())
        .map(ParseReport::into_conf)
}

/// Like [parse], with options, returning consumption diagnostics alongside the tree.
pub fn parse_with_report<S, B>(
    corpus_id: &str,
    variant: Option<&str>,
    backend: B,
    tokens: &[S],
    options: ParserOptions,
) -> Result<ParseReport<B>, ParseError>
where
    S: AsRef<str>,
    B: RegistryBackend,
{
    Parser::new(corpus_id, variant, backend, tokens)
        .with_options(options)
        .run()
}
