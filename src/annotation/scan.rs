//! Line scanner for annotated source files
//!
//! Finds the comment on every line of a source file, runs it through [`parse`] and
//! collects the results with their line numbers. Syntax errors are collected as
//! diagnostics so one bad annotation does not hide the rest of the file; a parser
//! invariant violation stops the scan.
//!
//! Associating annotations with the declarations they belong to is left to the
//! caller, which knows the host language.

use crate::annotation::ast::{Metadata, ParseError};
use crate::annotation::parser::parse;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// How comments are recognised in the scanned source
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanConfig {
    /// Markers that open a line comment, e.g. `//` or `#`
    pub comment_leaders: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            comment_leaders: vec!["//".to_string()],
        }
    }
}

impl ScanConfig {
    /// Build the regex matching any configured leader.
    ///
    /// Returns `None` when no leaders are configured.
    fn leader_pattern(&self) -> Option<Regex> {
        let alternatives: Vec<String> = self
            .comment_leaders
            .iter()
            .filter(|leader| !leader.is_empty())
            .map(|leader| regex::escape(leader))
            .collect();

        if alternatives.is_empty() {
            return None;
        }

        // Escaped literals joined by `|` always form a valid pattern
        Regex::new(&alternatives.join("|")).ok()
    }
}

/// A successfully parsed annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// 1-based line number in the scanned source
    pub line: usize,
    pub metadata: Metadata,
}

/// A syntax error found in an annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    pub message: String,
}

/// Everything found in one source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub annotations: Vec<Annotation>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Scan `source` line by line for annotations.
pub fn scan_source(source: &str, config: &ScanConfig) -> Result<ScanReport, ParseError> {
    let mut report = ScanReport::default();
    let Some(leaders) = config.leader_pattern() else {
        warn!("no comment leaders configured, nothing to scan");
        return Ok(report);
    };

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;

        match parse_first_annotation(&leaders, text) {
            Ok(Some(metadata)) => {
                debug!(line, %metadata, "annotation");
                report.annotations.push(Annotation { line, metadata });
            }
            Ok(None) => {}
            Err(err) if err.is_internal() => return Err(err),
            Err(err) => {
                warn!(line, error = %err, "invalid annotation");
                report.diagnostics.push(Diagnostic {
                    line,
                    message: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Parse the text after each leader on the line until one of them is an annotation.
///
/// A leader may also appear inside a string literal or URL before the real comment,
/// so a non-annotation after the first leader does not end the search.
fn parse_first_annotation(leaders: &Regex, text: &str) -> Result<Option<Metadata>, ParseError> {
    for found in leaders.find_iter(text) {
        if let Some(metadata) = parse(&text[found.end()..])? {
            return Ok(Some(metadata));
        }
    }
    Ok(None)
}
