//! Command-line interface for route annotations
//! This binary parses annotation lines and scans annotated source files.
//!
//! Usage:
//!   annotate parse `<line>`... [--format `<format>`]   - Parse annotation lines given as arguments
//!   annotate scan `<path>` [--format `<format>`]       - Scan the comments of a source file
//!   annotate tokens `<line>`...                       - Show the tokens of annotation lines
//!
//! Set RUST_LOG (e.g. `RUST_LOG=route_annotations=trace`) to follow the parser.

use clap::{Arg, ArgAction, ArgMatches, Command};
use route_annotations::annotation::processor::{
    available_formats, process_file, process_lines, OutputFormat,
};
use route_annotations::config::{AnnotateConfig, Loader, PROJECT_FILE};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let matches = Command::new("annotate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for parsing route and variable annotations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .global(true)
                .help("Output format (defaults to the configured one)")
                .value_parser(available_formats()),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Path to a TOML configuration file, layered over ./annotate.toml"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse annotation lines")
                .arg(
                    Arg::new("lines")
                        .help("Annotation lines, e.g. '> GET /customer/:id'")
                        .required(true)
                        .action(ArgAction::Append)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("scan")
                .about("Scan the comments of a source file for annotations")
                .arg(
                    Arg::new("path")
                        .help("Path to the source file")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("tokens")
                .about("Show the tokens of annotation lines")
                .arg(
                    Arg::new("lines")
                        .help("Annotation lines")
                        .required(true)
                        .action(ArgAction::Append)
                        .index(1),
                ),
        )
        .get_matches();

    let config = load_config(&matches);
    debug!(?config, "configuration loaded");

    match matches.subcommand() {
        Some(("parse", parse_matches)) => {
            handle_parse_command(&lines(parse_matches), config.output.format);
        }
        Some(("scan", scan_matches)) => {
            let path = scan_matches
                .get_one::<String>("path")
                .expect("path is required");
            handle_scan_command(path, &config);
        }
        Some(("tokens", tokens_matches)) => {
            handle_parse_command(&lines(tokens_matches), OutputFormat::Tokens);
        }
        _ => unreachable!(),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn lines(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("lines")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Layer the project file, the --config file and the --format flag over the defaults
fn load_config(matches: &ArgMatches) -> AnnotateConfig {
    let mut loader = Loader::new().with_optional_file(PROJECT_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }

    let loader = match matches.get_one::<String>("format") {
        Some(format) => loader.set_override("output.format", format.as_str()),
        None => Ok(loader),
    };

    loader.and_then(Loader::build).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

/// Handle the parse and tokens commands
fn handle_parse_command(lines: &[String], format: OutputFormat) {
    let output = process_lines(lines, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
}

/// Handle the scan command; exits with 1 when any annotation is invalid
fn handle_scan_command(path: &str, config: &AnnotateConfig) {
    let format = match config.output.format {
        OutputFormat::Tokens => {
            eprintln!("Format 'tokens' not supported for scan");
            std::process::exit(1);
        }
        format => format,
    };

    let (report, output) = process_file(path, &config.scan, format).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    print!("{}", output);
    if !report.is_clean() {
        std::process::exit(1);
    }
}
