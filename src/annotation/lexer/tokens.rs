//! Token definitions for annotation lines
//!
//! This module defines all the tokens that can be produced by the annotation lexer.
//! The tokens are defined using the logos derive macro. Whitespace only separates
//! tokens and is never emitted.
use logos::Logos;
use serde::Serialize;
use std::fmt;

/// All possible tokens in an annotation line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Serialize)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Leading `>` that marks a comment as an annotation
    #[token(">")]
    Declarator,

    #[token("/")]
    Slash,

    #[token(":")]
    Colon,

    #[token("?")]
    Query,

    #[regex(r"[\p{L}\p{N}_]+", |lex| lex.slice().to_owned())]
    Identifier(String),

    /// Synthetic marker emitted once the source is exhausted
    EndOfInput,
}

impl Token {
    /// Check if this token is an identifier
    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    /// Check if this token is one of the punctuation symbols
    pub fn is_symbol(&self) -> bool {
        matches!(
            self,
            Token::Declarator | Token::Slash | Token::Colon | Token::Query
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Declarator => write!(f, "'>'"),
            Token::Slash => write!(f, "'/'"),
            Token::Colon => write!(f, "':'"),
            Token::Query => write!(f, "'?'"),
            Token::Identifier(name) => write!(f, "'{}'", name),
            Token::EndOfInput => write!(f, "end of input"),
        }
    }
}
