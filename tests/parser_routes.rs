//! Route annotation parsing
//!
//! Covers the method keyword, literal and placeholder path segments, the mapping of
//! placeholder names and the query section.

use route_annotations::{parse, HttpMethod, Metadata, PathSegment, RouteInfo};
use rstest::rstest;

fn route(line: &str) -> RouteInfo {
    match parse(line) {
        Ok(Some(Metadata::Route(route))) => route,
        other => panic!("expected a route for {:?}, got {:?}", line, other),
    }
}

#[test]
fn test_annotation_with_declarator() {
    assert!(parse(">GET /customers").unwrap().is_some());
}

#[rstest]
#[case("> GET /customer/:id", HttpMethod::Get)]
#[case("> POST /customer/:id", HttpMethod::Post)]
#[case("> PUT /customer/:id", HttpMethod::Put)]
#[case("> DELETE /customer/:id", HttpMethod::Delete)]
#[case("> get /customer/:id", HttpMethod::Get)]
#[case("> Post /customer/:id", HttpMethod::Post)]
#[case("> pUT /customer/:id", HttpMethod::Put)]
#[case("> delete /customer/:id", HttpMethod::Delete)]
fn test_route_method(#[case] line: &str, #[case] expected: HttpMethod) {
    let route = route(line);
    assert_eq!(route.method, expected);
    assert_eq!(route.method.to_string(), expected.as_str());
}

#[test]
fn test_metadata_of_route() {
    let route = route("> GET /customer");
    assert_eq!(route.path_string(), "/customer");
    assert!(route.mapping.is_empty());
    assert!(route.query.is_empty());
}

#[test]
fn test_route_parsed_variable() {
    let route = route("> GET /customer/:id");
    assert!(route.mapping.contains("id"));
    assert_eq!(route.mapping.len(), 1);
}

#[test]
fn test_route_extraction_with_query() {
    let route = route("> GET /customer/:id ? :token :customized");
    assert_eq!(route.query, vec!["token", "customized"]);
}

#[test]
fn test_full_route_shape() {
    let route = route("> PUT /shops/:shop/orders/:order/items ? :page :limit");

    assert_eq!(route.method, HttpMethod::Put);
    assert_eq!(
        route.path,
        vec![
            PathSegment::Literal("shops".to_string()),
            PathSegment::Variable("shop".to_string()),
            PathSegment::Literal("orders".to_string()),
            PathSegment::Variable("order".to_string()),
            PathSegment::Literal("items".to_string()),
        ]
    );
    assert!(route.has_variable("shop"));
    assert!(route.has_variable("order"));
    assert!(!route.has_variable("items"));
    assert_eq!(route.query, vec!["page", "limit"]);
}

#[test]
fn test_mapping_matches_path_placeholders() {
    let route = route("> GET /a/:x/b/:y/:z");
    let placeholders: std::collections::BTreeSet<String> = route
        .path
        .iter()
        .filter(|segment| segment.is_variable())
        .map(|segment| segment.name().to_string())
        .collect();
    assert_eq!(route.mapping, placeholders);
}

#[test]
fn test_identifiers_keep_their_case() {
    let route = route("> get /Customer/:customerID ? :Token");
    assert_eq!(route.path_string(), "/Customer/:customerID");
    assert!(route.has_variable("customerID"));
    assert!(!route.has_variable("customerid"));
    assert_eq!(route.query, vec!["Token"]);
}

#[test]
fn test_duplicate_query_arguments_are_kept() {
    let route = route("> GET /search ? :tag :tag :page");
    assert_eq!(route.query, vec!["tag", "tag", "page"]);
}

#[test]
fn test_duplicate_path_variables_share_mapping_entry() {
    let route = route("> GET /:id/copy/:id");
    assert_eq!(route.path.len(), 3);
    assert_eq!(route.mapping.len(), 1);
}

#[rstest]
#[case("> GET /customer ? :token")]
#[case(">GET/customer?:token")]
#[case("   //   >   GET   /   customer   ?   :   token   ")]
fn test_whitespace_is_only_a_separator(#[case] line: &str) {
    let route = route(line);
    assert_eq!(route.path_string(), "/customer");
    assert_eq!(route.query, vec!["token"]);
}

#[test]
fn test_query_without_variables_in_path() {
    let route = route("> POST /login ? :user");
    assert!(route.mapping.is_empty());
    assert_eq!(route.query, vec!["user"]);
}

#[test]
fn test_reparsing_is_idempotent() {
    let line = "> DELETE /customer/:id ? :token";
    assert_eq!(parse(line), parse(line));
}

#[test]
fn test_display_reproduces_canonical_line() {
    let meta = parse("//>   get /customer/:id ?   :token :customized")
        .unwrap()
        .unwrap();
    insta::assert_snapshot!(meta.to_string(), @"> GET /customer/:id ? :token :customized");
}

#[test]
fn test_route_with_non_ascii_segments() {
    let route = route("> GET /kunden/:straße ? :größe");
    assert_eq!(
        route.path,
        vec![
            PathSegment::Literal("kunden".to_string()),
            PathSegment::Variable("straße".to_string()),
        ]
    );
    assert!(route.has_variable("straße"));
    assert_eq!(route.query, vec!["größe"]);
}
