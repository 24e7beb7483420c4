//! Route metadata: HTTP method, path segments and query arguments

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// HTTP methods an annotation may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    /// Any keyword that is not a supported method. Never part of a parsed route.
    Incompatible,
}

impl HttpMethod {
    /// Map a keyword to a method, ignoring case
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_lowercase().as_str() {
            "get" => HttpMethod::Get,
            "post" => HttpMethod::Post,
            "put" => HttpMethod::Put,
            "delete" => HttpMethod::Delete,
            _ => HttpMethod::Incompatible,
        }
    }

    pub fn is_compatible(&self) -> bool {
        !matches!(self, HttpMethod::Incompatible)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Incompatible => "UNDEFINED",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `/`-separated piece of a route path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum PathSegment {
    /// Fixed text, e.g. `customer` in `/customer/:id`
    Literal(String),
    /// Placeholder bound to a variable, e.g. `id` in `/customer/:id`
    Variable(String),
}

impl PathSegment {
    pub fn name(&self) -> &str {
        match self {
            PathSegment::Literal(name) | PathSegment::Variable(name) => name,
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, PathSegment::Variable(_))
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Literal(name) => write!(f, "{}", name),
            PathSegment::Variable(name) => write!(f, ":{}", name),
        }
    }
}

/// Structured form of `> METHOD /path/:var ? :arg`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteInfo {
    pub method: HttpMethod,
    pub path: Vec<PathSegment>,
    /// Names of every placeholder in `path`, sorted
    pub mapping: BTreeSet<String>,
    /// Query argument names in declaration order, duplicates kept
    pub query: Vec<String>,
}

impl RouteInfo {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            path: Vec::new(),
            mapping: BTreeSet::new(),
            query: Vec::new(),
        }
    }

    pub fn push_literal(&mut self, segment: impl Into<String>) {
        self.path.push(PathSegment::Literal(segment.into()));
    }

    /// Append a placeholder segment and register its name in `mapping`
    pub fn push_variable(&mut self, variable: impl Into<String>) {
        let variable = variable.into();
        self.mapping.insert(variable.clone());
        self.path.push(PathSegment::Variable(variable));
    }

    pub fn push_query(&mut self, argument: impl Into<String>) {
        self.query.push(argument.into());
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.mapping.contains(name)
    }

    /// Render the path as written in the annotation, e.g. `/customer/:id`
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(|segment| format!("/{}", segment))
            .collect()
    }
}

impl fmt::Display for RouteInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path_string())?;
        if !self.query.is_empty() {
            write!(f, " ?")?;
            for argument in &self.query {
                write!(f, " :{}", argument)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_keywords_ignore_case() {
        assert_eq!(HttpMethod::from_keyword("GET"), HttpMethod::Get);
        assert_eq!(HttpMethod::from_keyword("post"), HttpMethod::Post);
        assert_eq!(HttpMethod::from_keyword("Put"), HttpMethod::Put);
        assert_eq!(HttpMethod::from_keyword("dElEtE"), HttpMethod::Delete);
        assert_eq!(HttpMethod::from_keyword("PATCH"), HttpMethod::Incompatible);
        assert_eq!(HttpMethod::from_keyword("customer"), HttpMethod::Incompatible);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::Incompatible.to_string(), "UNDEFINED");
        assert!(!HttpMethod::Incompatible.is_compatible());
    }

    #[test]
    fn test_push_variable_registers_mapping() {
        let mut route = RouteInfo::new(HttpMethod::Get);
        route.push_literal("customer");
        route.push_variable("id");

        assert_eq!(
            route.path,
            vec![
                PathSegment::Literal("customer".to_string()),
                PathSegment::Variable("id".to_string())
            ]
        );
        assert!(route.has_variable("id"));
        assert!(!route.has_variable("customer"));
        assert_eq!(route.mapping.len(), 1);
    }

    #[test]
    fn test_duplicate_variable_keeps_single_mapping_entry() {
        let mut route = RouteInfo::new(HttpMethod::Put);
        route.push_variable("id");
        route.push_variable("id");

        assert_eq!(route.path.len(), 2);
        assert_eq!(route.mapping.len(), 1);
    }

    #[test]
    fn test_path_string() {
        let mut route = RouteInfo::new(HttpMethod::Get);
        assert_eq!(route.path_string(), "");

        route.push_literal("customer");
        route.push_variable("id");
        route.push_literal("orders");
        assert_eq!(route.path_string(), "/customer/:id/orders");
    }

    #[test]
    fn test_route_display_with_query() {
        let mut route = RouteInfo::new(HttpMethod::Post);
        route.push_literal("emails");
        route.push_query("token");
        route.push_query("token");

        assert_eq!(route.to_string(), "POST /emails ? :token :token");
    }
}
