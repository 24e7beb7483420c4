//! The parse result: one of route, single variable or variable list

use super::route::RouteInfo;
use super::variable::{MultiVariableInfo, VariableInfo};
use serde::Serialize;
use std::fmt;

/// Structured form of one annotation line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Metadata {
    Route(RouteInfo),
    Variable(VariableInfo),
    MultiVariable(MultiVariableInfo),
}

/// Discriminant of [`Metadata`], handy for filtering and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    Route,
    Variable,
    MultiVariable,
}

impl Metadata {
    pub fn kind(&self) -> MetadataKind {
        match self {
            Metadata::Route(_) => MetadataKind::Route,
            Metadata::Variable(_) => MetadataKind::Variable,
            Metadata::MultiVariable(_) => MetadataKind::MultiVariable,
        }
    }

    pub fn as_route(&self) -> Option<&RouteInfo> {
        match self {
            Metadata::Route(route) => Some(route),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableInfo> {
        match self {
            Metadata::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_multi_variable(&self) -> Option<&MultiVariableInfo> {
        match self {
            Metadata::MultiVariable(variables) => Some(variables),
            _ => None,
        }
    }
}

/// Renders the canonical annotation line, e.g. `> GET /customer/:id ? :token`
impl fmt::Display for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metadata::Route(route) => write!(f, "> {}", route),
            Metadata::Variable(variable) => write!(f, "> :{}", variable.name),
            Metadata::MultiVariable(variables) => {
                write!(f, ">")?;
                for name in &variables.names {
                    write!(f, " :{}", name)?;
                }
                Ok(())
            }
        }
    }
}
