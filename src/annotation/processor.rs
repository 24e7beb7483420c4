//! Processing API for annotations
//!
//! Runs annotation lines or whole source files through the parser and renders the
//! result in one of several output formats (simple, json, yaml, tokens).

use crate::annotation::ast::{Metadata, ParseError};
use crate::annotation::lexer::Tokenizer;
use crate::annotation::parser::parse;
use crate::annotation::scan::{scan_source, ScanConfig, ScanReport};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical annotation lines
    Simple,
    Json,
    Yaml,
    /// Raw token stream, before parsing
    Tokens,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Tokens => "tokens",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ProcessingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "tokens" => Ok(OutputFormat::Tokens),
            other => Err(ProcessingError::InvalidFormat(other.to_string())),
        }
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<&'static str> {
    [
        OutputFormat::Simple,
        OutputFormat::Json,
        OutputFormat::Yaml,
        OutputFormat::Tokens,
    ]
    .iter()
    .map(OutputFormat::as_str)
    .collect()
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    /// A format that does not apply to this kind of output
    UnsupportedFormat(OutputFormat),
    Parse { line: String, error: ParseError },
    Serialize(String),
    IoError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(
                f,
                "Invalid format: {} (available: {})",
                format,
                available_formats().join(", ")
            ),
            ProcessingError::UnsupportedFormat(format) => {
                write!(f, "Format '{}' is not supported here", format.as_str())
            }
            ProcessingError::Parse { line, error } => write!(f, "{}: {}", line, error),
            ProcessingError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

/// One input line and what it parsed to; `None` for ordinary comments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    pub source: String,
    pub metadata: Option<Metadata>,
}

fn to_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| ProcessingError::Serialize(e.to_string())),
        OutputFormat::Yaml => {
            serde_yaml::to_string(value).map_err(|e| ProcessingError::Serialize(e.to_string()))
        }
        other => Err(ProcessingError::UnsupportedFormat(other)),
    }
}

/// Parse every line, failing on the first syntax error
pub fn parse_lines<'a, I>(lines: I) -> Result<Vec<ParsedLine>, ProcessingError>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(|line| {
            parse(line)
                .map(|metadata| ParsedLine {
                    source: line.to_string(),
                    metadata,
                })
                .map_err(|error| ProcessingError::Parse {
                    line: line.to_string(),
                    error,
                })
        })
        .collect()
}

/// Render parsed lines according to the format
pub fn format_parsed(parsed: &[ParsedLine], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for line in parsed {
                match &line.metadata {
                    Some(metadata) => result.push_str(&metadata.to_string()),
                    None => result.push_str("<none>"),
                }
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Tokens => Err(ProcessingError::UnsupportedFormat(format)),
        structured => to_structured(&parsed, structured),
    }
}

/// Render a scan report according to the format
pub fn format_report(report: &ScanReport, format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for annotation in &report.annotations {
                result.push_str(&format!("{}: {}\n", annotation.line, annotation.metadata));
            }
            for diagnostic in &report.diagnostics {
                result.push_str(&format!("{}: error: {}\n", diagnostic.line, diagnostic.message));
            }
            Ok(result)
        }
        OutputFormat::Tokens => Err(ProcessingError::UnsupportedFormat(format)),
        structured => to_structured(report, structured),
    }
}

/// Render the token stream of one line, unrecognised input included as `<error '..'>`
pub fn format_tokens(line: &str) -> String {
    Tokenizer::new(line)
        .map(|result| match result {
            Ok(token) => token.to_string(),
            Err(err) => format!("<error '{}'>", err.slice),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Process annotation lines given directly, e.g. on the command line
pub fn process_lines(lines: &[String], format: OutputFormat) -> Result<String, ProcessingError> {
    if format == OutputFormat::Tokens {
        let rendered: Vec<String> = lines.iter().map(|line| format_tokens(line)).collect();
        return Ok(rendered.join("\n") + "\n");
    }

    let parsed = parse_lines(lines.iter().map(String::as_str))?;
    format_parsed(&parsed, format)
}

/// Scan a source file and render its report
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    config: &ScanConfig,
    format: OutputFormat,
) -> Result<(ScanReport, String), ProcessingError> {
    let file_path = file_path.as_ref();
    let content = fs::read_to_string(file_path).map_err(|e| {
        ProcessingError::IoError(format!("Failed to read {}: {}", file_path.display(), e))
    })?;

    let report = scan_source(&content, config).map_err(|error| ProcessingError::Parse {
        line: file_path.display().to_string(),
        error,
    })?;
    let output = format_report(&report, format)?;
    Ok((report, output))
}
