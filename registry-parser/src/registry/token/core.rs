//! Raw token definitions for registry text
//!
//! The tokens are defined using the logos derive macro. They are only an intermediate
//! step: [lexing](crate::registry::lexing) flattens them into the string stream the parser
//! consumes, so the parser stays independent of how the text was split.

use logos::{Lexer, Logos};

/// All tokens the registry tokenizer can produce
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[^\S\n]+")]
pub enum RawToken {
    // Statement ends
    #[token("\n")]
    Newline,
    #[token("$")]
    End,

    // A backslash right before the line break joins the next line to this statement
    #[regex(r"\\\r?\n")]
    Continuation,

    // Brackets
    #[token("{")]
    Open,
    #[token("}")]
    Close,

    // Comment up to (not including) the end of line
    #[regex(r"#[^\n]*", |lex| lex.slice().trim_end().to_string())]
    Comment(String),

    #[regex(r#""([^"\\\n]|\\.)*""#, unquote)]
    Quoted(String),

    // Any other run of characters. A backslash is literal unless it precedes whitespace.
    #[regex(r#"([^\s{}"$#\\]|\\[^\s])([^\s{}"$\\]|\\[^\s])*"#, |lex| lex.slice().to_string())]
    Word(String),
}

fn unquote(lex: &mut Lexer<RawToken>) -> String {
    let slice = lex.slice();
    let inner = &slice[1..slice.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped @ ('"' | '\\')) => out.push(escaped),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

impl RawToken {
    /// The string this token contributes to the parser input, if any.
    pub fn into_text(self) -> Option<String> {
        match self {
            RawToken::Newline | RawToken::End => Some(super::END.to_string()),
            RawToken::Continuation => None,
            RawToken::Open => Some(super::OPEN.to_string()),
            RawToken::Close => Some(super::CLOSE.to_string()),
            RawToken::Comment(text) | RawToken::Quoted(text) | RawToken::Word(text) => {
                Some(text)
            }
        }
    }
}
