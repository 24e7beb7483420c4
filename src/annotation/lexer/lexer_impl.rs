//! Implementation of the annotation tokenizer
//!
//! Tokenization itself is handled by logos. [`Tokenizer`] wraps the logos lexer to
//! attach the offending text to lexing errors and to close the stream with a single
//! [`Token::EndOfInput`].

use crate::annotation::lexer::tokens::Token;
use logos::Logos;
use std::fmt;

/// A character sequence that is not part of the annotation token set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub slice: String,
    pub span: logos::Span,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized input '{}' at {:?}", self.slice, self.span)
    }
}

impl std::error::Error for LexError {}

/// Lazy, pull-based token stream over a single annotation line.
///
/// Yields every logos token in order, then exactly one `EndOfInput`, then `None`.
pub struct Tokenizer<'src> {
    inner: logos::Lexer<'src, Token>,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            inner: Token::lexer(source),
            finished: false,
        }
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(token)) => Some(Ok(token)),
            Some(Err(())) => Some(Err(LexError {
                slice: self.inner.slice().to_string(),
                span: self.inner.span(),
            })),
            None => {
                self.finished = true;
                Some(Ok(Token::EndOfInput))
            }
        }
    }
}
