//! Error types for annotation parsing
//!
//! Every variant except [`ParseError::InternalInvariantViolation`] is a syntax
//! diagnostic meant for the author of the annotation. The messages are stable.

use std::fmt;

/// Where a misplaced `/` was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlashContext {
    /// After `?`, where only `:name` arguments are allowed
    Query,
    /// In a `> :name` variable declaration
    Variables,
}

/// Errors that can occur while parsing an annotation line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The declarator is followed by something other than GET/POST/PUT/DELETE
    MissingHttpMethod,
    InvalidSlashUsage(SlashContext),
    /// A `:` with no identifier after it, in path, query or variable position
    DanglingColon,
    /// A route without a path, or a `/` with no segment after it
    MissingPathSegment,
    /// A `?` not followed by `:name`
    MissingQueryArgument,
    /// A token the grammar does not allow at this point
    UnexpectedToken { found: String },
    /// The parser reached a state its own transitions should rule out
    InternalInvariantViolation(String),
}

impl ParseError {
    /// True for parser bugs, false for user syntax errors
    pub fn is_internal(&self) -> bool {
        matches!(self, ParseError::InternalInvariantViolation(_))
    }

    pub(crate) fn unexpected(found: impl fmt::Display) -> Self {
        ParseError::UnexpectedToken {
            found: found.to_string(),
        }
    }

    pub(crate) fn internal(detail: impl Into<String>) -> Self {
        ParseError::InternalInvariantViolation(detail.into())
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MissingHttpMethod => write!(f, "Expected an Http Method before a path"),
            ParseError::InvalidSlashUsage(SlashContext::Query) => {
                write!(f, "Syntax error. Use only identifiers in the query statement")
            }
            ParseError::InvalidSlashUsage(SlashContext::Variables) => {
                write!(f, "Syntax error. Use of '/' is only valid for Path declaration")
            }
            ParseError::DanglingColon => {
                write!(f, "Syntax error. Expected an identifier after ':'")
            }
            ParseError::MissingPathSegment => write!(
                f,
                "Syntax error. Expected an identifier or variable in your route declaration"
            ),
            ParseError::MissingQueryArgument => {
                write!(f, "Syntax error. Expected ':' and an identifier after '?'")
            }
            ParseError::UnexpectedToken { found } => {
                write!(f, "Syntax error. Unexpected {}", found)
            }
            ParseError::InternalInvariantViolation(detail) => write!(f, "Bug error. {}", detail),
        }
    }
}

impl std::error::Error for ParseError {}
