//! Main module for annotation parsing

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod scan;
