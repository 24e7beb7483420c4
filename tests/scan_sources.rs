//! Scanning annotated source files
//!
//! Exercises the scanner and processor over a small controller written in the
//! style the annotations are meant for.

use route_annotations::annotation::processor::{format_report, process_file, OutputFormat};
use route_annotations::annotation::scan::{scan_source, ScanConfig};
use std::io::Write;

const CONTROLLER: &str = "package main

type Login winter.Controller

//kkk
//> GET /customers/:id
func (login *Login) GetCustomer(
\tid uint32, //> :id
\ttoken string, //> :token
\tcoordinates string, //> :lat :lng
) (response winter.Response, err winter.Error) {
\treturn
}

//> GET /emails/:email
func (login *Login) GetEmail(
\temail string, //> :email
) (response winter.Response, err winter.Error) {
\treturn
}
";

#[test]
fn test_scan_controller_simple_report() {
    let report = scan_source(CONTROLLER, &ScanConfig::default()).unwrap();
    let output = format_report(&report, OutputFormat::Simple).unwrap();

    insta::assert_snapshot!(output, @r"
    6: > GET /customers/:id
    8: > :id
    9: > :token
    10: > :lat :lng
    15: > GET /emails/:email
    17: > :email
    ");
}

#[test]
fn test_scan_controller_json_report() {
    let report = scan_source(CONTROLLER, &ScanConfig::default()).unwrap();
    let json = format_report(&report, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["annotations"].as_array().unwrap().len(), 6);
    assert_eq!(value["annotations"][0]["line"], 6);
    assert_eq!(value["annotations"][0]["metadata"]["type"], "route");
    assert_eq!(value["annotations"][0]["metadata"]["method"], "GET");
    assert_eq!(
        value["annotations"][0]["metadata"]["path"],
        serde_json::json!([
            { "kind": "literal", "name": "customers" },
            { "kind": "variable", "name": "id" }
        ])
    );
    assert_eq!(value["annotations"][3]["metadata"]["type"], "multi_variable");
    assert_eq!(value["diagnostics"], serde_json::json!([]));
}

#[test]
fn test_scan_reports_diagnostics_with_lines() {
    let source = "//> GET /a/:\nfn a() {}\n//> :ok\n//> POST /b ? /c\n";
    let report = scan_source(source, &ScanConfig::default()).unwrap();
    let output = format_report(&report, OutputFormat::Simple).unwrap();

    insta::assert_snapshot!(output, @r"
    3: > :ok
    1: error: Syntax error. Expected an identifier after ':'
    4: error: Syntax error. Use only identifiers in the query statement
    ");
    assert!(!report.is_clean());
}

#[test]
fn test_process_file_reads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(CONTROLLER.as_bytes()).expect("write source");

    let (report, output) =
        process_file(file.path(), &ScanConfig::default(), OutputFormat::Yaml).unwrap();
    assert_eq!(report.annotations.len(), 6);
    assert!(output.contains("type: multi_variable"));
}

#[test]
fn test_process_file_missing_path() {
    let err = process_file(
        "/nonexistent/controller.go",
        &ScanConfig::default(),
        OutputFormat::Simple,
    )
    .unwrap_err();
    assert!(err.to_string().starts_with("IO error: Failed to read"));
}
