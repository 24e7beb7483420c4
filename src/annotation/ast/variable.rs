//! Variable metadata attached to parameter annotations

use serde::Serialize;

/// A single bound name, from `> :name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableInfo {
    pub name: String,
}

impl VariableInfo {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Turn this single name into a list headed by it, followed by `next`
    pub fn promote(self, next: impl Into<String>) -> MultiVariableInfo {
        MultiVariableInfo {
            names: vec![self.name, next.into()],
        }
    }
}

/// Two or more bound names declared on one line, from `> :name :address`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiVariableInfo {
    pub names: Vec<String>,
}

impl MultiVariableInfo {
    pub fn push(&mut self, name: impl Into<String>) {
        self.names.push(name.into());
    }
}
