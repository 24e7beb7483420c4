//! Lexer module for annotation lines
//!
//! This module contains the tokenization logic for annotations, including the
//! token definitions and the pull-based tokenizer consumed by the parser.
//!
//! The token set is deliberately tiny: the declarator `>`, the path separator `/`,
//! the variable marker `:`, the query marker `?` and identifiers. Anything else is
//! reported as a [`LexError`] and left to the parser to interpret.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::{LexError, Tokenizer};
pub use tokens::Token;
