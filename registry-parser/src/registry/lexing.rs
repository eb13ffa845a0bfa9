//! Lexer
//!
//!     Turns raw registry text into the flat token stream the parser consumes. The
//!     parser's input contract is only "an ordered sequence of strings", so this module is
//!     a convenience: callers with their own tokenizer can bypass it.
//!
//! Rules
//!
//!     - Blanks separate tokens, including Unicode ones such as the no-break space.
//!     - Every line break ends a statement and becomes a `$` token. A literal `$` does the
//!       same. A `$` is appended when the last statement is left open, so every statement
//!       ends in `$`.
//!     - `{` and `}` are always standalone tokens.
//!     - `#` at the start of a word opens a comment that runs to the end of the line. The
//!       whole comment is a single token, followed by the `$` of its line.
//!     - A backslash right before a line break continues the statement on the next line.
//!       Anywhere else a backslash must be followed by a non-blank character; a backslash
//!       before a blank is an error.
//!     - Double-quoted values are single tokens; the quotes are removed and `\"`, `\\`
//!       are unescaped. The unquoted text must not read as a marker: `"{"`, `"}"`, `"$"`
//!       and anything starting with `"#` are rejected, since the parser only sees the
//!       unquoted string.

use crate::registry::token::{is_comment, RawToken, CLOSE, END, OPEN};
use logos::Logos;
use std::ops::Range;
use thiserror::Error;

/// Errors that can occur during lexing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Input that no token rule accepts, e.g. an unterminated quoted value
    #[error("unexpected input {text:?} at bytes {}..{}", span.start, span.end)]
    Unexpected { text: String, span: Range<usize> },
    /// A quoted value the parser would take for a bracket, a statement end or a comment
    #[error("quoted value {text:?} at bytes {}..{} reads as a marker", span.start, span.end)]
    QuotedMarker { text: String, span: Range<usize> },
}

fn reads_as_marker(text: &str) -> bool {
    text == OPEN || text == CLOSE || text == END || is_comment(text)
}

/// Tokenize registry text into the parser's input stream.
pub fn tokenize(source: &str) -> Result<Vec<String>, LexError> {
    Ok(tokenize_with_spans(source)?
        .into_iter()
        .map(|(token, _)| token)
        .collect())
}

/// Tokenize registry text, keeping the byte range each token came from.
///
/// The `$` appended for a statement left open at the end gets the empty range at the end
/// of the source.
pub fn tokenize_with_spans(source: &str) -> Result<Vec<(String, Range<usize>)>, LexError> {
    let mut lexer = RawToken::lexer(source);
    let mut tokens = Vec::new();
    let mut open_statement = false;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let token = result.map_err(|()| LexError::Unexpected {
            text: lexer.slice().to_string(),
            span: span.clone(),
        })?;
        match &token {
            RawToken::Newline | RawToken::End => open_statement = false,
            RawToken::Continuation => {}
            RawToken::Quoted(text) if reads_as_marker(text) => {
                return Err(LexError::QuotedMarker {
                    text: text.clone(),
                    span,
                });
            }
            _ => open_statement = true,
        }
        if let Some(text) = token.into_text() {
            tokens.push((text, span));
        }
    }

    if open_statement {
        tokens.push((END.to_string(), source.len()..source.len()));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(source: &str) -> Vec<String> {
        tokenize(source).expect("tokenize failed")
    }

    #[test]
    fn test_simple_statements() {
        assert_eq!(
            toks("ATTRIBUTE word\nENCODING utf8\n"),
            vec!["ATTRIBUTE", "word", "$", "ENCODING", "utf8", "$"]
        );
    }

    #[test]
    fn test_appends_end_when_missing_newline() {
        assert_eq!(toks("ATTRIBUTE word"), vec!["ATTRIBUTE", "word", "$"]);
    }

    #[test]
    fn test_empty_source() {
        assert!(toks("").is_empty());
    }

    #[test]
    fn test_structure_block() {
        let source = "STRUCTURE doc {\n    ATTRIBUTE id\n}\n";
        assert_eq!(
            toks(source),
            vec!["STRUCTURE", "doc", "{", "$", "ATTRIBUTE", "id", "$", "}", "$"]
        );
    }

    #[test]
    fn test_literal_dollar_ends_statement() {
        assert_eq!(
            toks("ATTRIBUTE word $ ATTRIBUTE lemma"),
            vec!["ATTRIBUTE", "word", "$", "ATTRIBUTE", "lemma", "$"]
        );
    }

    #[test]
    fn test_comment_line() {
        assert_eq!(
            toks("# positional attributes\nATTRIBUTE word\n"),
            vec!["# positional attributes", "$", "ATTRIBUTE", "word", "$"]
        );
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(
            toks("INFO first \\\n  second\n"),
            vec!["INFO", "first", "second", "$"]
        );
    }

    #[test]
    fn test_quoted_value_keeps_spaces() {
        assert_eq!(
            toks("NAME \"Czech National Corpus\"\n"),
            vec!["NAME", "Czech National Corpus", "$"]
        );
    }

    #[test]
    fn test_spans() {
        let tokens = tokenize_with_spans("A b").unwrap();
        assert_eq!(
            tokens,
            vec![
                ("A".to_string(), 0..1),
                ("b".to_string(), 2..3),
                ("$".to_string(), 3..3),
            ]
        );
    }

    #[test]
    fn test_unterminated_quote_is_an_error() {
        match tokenize("NAME \"open\n").unwrap_err() {
            LexError::Unexpected { text, span } => {
                assert_eq!(span.start, 5);
                assert!(text.starts_with('"'));
            }
            other => panic!("expected Unexpected, got {other:?}"),
        }
    }

    #[test]
    fn test_quoted_marker_is_an_error() {
        assert_eq!(
            tokenize("INFO \"# of docs\"\nATTRIBUTE word\n"),
            Err(LexError::QuotedMarker {
                text: "# of docs".to_string(),
                span: 5..16,
            })
        );
        for source in ["DISPLAYBEGIN \"{\"", "DISPLAYEND \"}\"", "SEP \"$\""] {
            assert!(
                matches!(tokenize(source), Err(LexError::QuotedMarker { .. })),
                "{source} should be rejected"
            );
        }
    }

    #[test]
    fn test_quoted_text_around_markers_is_kept() {
        assert_eq!(
            toks("INFO \"docs # of\"\nDISPLAYBEGIN \"{x\"\n"),
            vec!["INFO", "docs # of", "$", "DISPLAYBEGIN", "{x", "$"]
        );
    }

    #[test]
    fn test_continuation_on_last_line_still_ends_statement() {
        assert_eq!(toks("A b\\\n"), vec!["A", "b", "$"]);
        assert_eq!(
            tokenize_with_spans("A b\\\n").unwrap().last(),
            Some(&("$".to_string(), 5..5))
        );
    }

    #[test]
    fn test_no_duplicate_end_after_literal_dollar() {
        assert_eq!(toks("A b $"), vec!["A", "b", "$"]);
        assert!(toks("  \t").is_empty());
    }

    #[test]
    fn test_unicode_blanks_separate_tokens() {
        assert_eq!(
            toks("LANGUAGE Čeština\u{a0}x\u{3000}y\n"),
            vec!["LANGUAGE", "Čeština", "x", "y", "$"]
        );
    }

    #[test]
    fn test_backslash_before_blank_is_an_error() {
        let err = tokenize("PATH C:\\ x\n").unwrap_err();
        assert!(matches!(err, LexError::Unexpected { ref text, .. } if text == "\\"));
        assert_eq!(toks("PATH C:\\x\n"), vec!["PATH", "C:\\x", "$"]);
    }
}
