//! # route-annotations
//!
//! A parser for the one-line annotations that describe HTTP routes and their bound
//! variables inside source comments:
//!
//! ```text
//! //> GET /customer/:id ? :token
//! func GetCustomer(
//!     id uint32,    //> :id
//!     token string, //> :token
//! )
//! ```
//!
//! [`annotation::parser::parse`] handles one line at a time and returns `Ok(None)` for
//! comments that are not annotations. [`annotation::scan`] applies it to every comment
//! of a source file, and [`annotation::processor`] renders the results.
//!
//! Layout
//!
//! src/annotation
//!   ├── lexer       logos tokens and the pull-based tokenizer
//!   ├── parser      state machine driving the grammar
//!   ├── ast         metadata model and parse errors
//!   ├── scan        per-line scanning of source files
//!   └── processor   output formats
//! src/config.rs     layered configuration for the `annotate` binary

pub mod annotation;
pub mod config;

pub use annotation::ast::{
    HttpMethod, Metadata, MultiVariableInfo, ParseError, PathSegment, RouteInfo, VariableInfo,
};
pub use annotation::parser::parse;
