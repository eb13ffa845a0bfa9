//! Token classification shared by the tokenizer, the parser and the serializers.
//!
//! The parser never sees typed tokens: its input contract is a flat sequence of strings.
//! Everything it needs to know about a token is answered by the two predicates here plus
//! the three marker constants.

pub mod core;

pub use core::RawToken;

use once_cell::sync::Lazy;
use regex::Regex;

/// End-of-statement marker.
pub const END: &str = "$";
/// Opens a structure or attribute body.
pub const OPEN: &str = "{";
/// Closes a structure or attribute body.
pub const CLOSE: &str = "}";
/// Prefix of a comment-start token.
pub const COMMENT_PREFIX: char = '#';

/// Key that introduces a positional attribute at the top level, or a nested attribute
/// inside a structure body.
pub const ATTRIBUTE: &str = "ATTRIBUTE";
/// Key that introduces a structure.
pub const STRUCTURE: &str = "STRUCTURE";

// Anchored at the start only. A token such as `MAXCOLS2` or `Xfoo` still counts as a key.
static KEY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]+").unwrap());

/// True iff the token starts with one or more uppercase ASCII letters.
pub fn is_key(token: &str) -> bool {
    KEY_PATTERN.is_match(token)
}

/// True iff the token is neither a bracket nor a comment start.
///
/// `$` is a value by this definition; every transition checks for it before asking.
pub fn is_value(token: &str) -> bool {
    token != OPEN && token != CLOSE && !is_comment(token)
}

/// True iff the token starts a comment.
pub fn is_comment(token: &str) -> bool {
    token.starts_with(COMMENT_PREFIX)
}

/// True iff the token ends a statement.
pub fn is_end(token: &str) -> bool {
    token == END
}
