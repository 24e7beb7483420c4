//! Parser states
//!
//! Each state that waits on a particular token carries that expectation with it,
//! so the transition table alone decides what is legal next.

/// What a route path accepts next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathExpect {
    /// Right after the method: the path must open with `/`
    Slash,
    /// After `/`: a literal identifier or `:`
    Segment,
    /// After `/:`: the placeholder name
    Variable,
    /// After a complete segment: `/`, `?` or end of input
    Next,
}

/// What a query section accepts next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryExpect {
    /// Right after `?`: the first `:`
    Colon,
    /// After `:`: the argument name
    Name,
    /// After an argument: another `:` or end of input
    Next,
}

/// What a variable declaration accepts next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListExpect {
    Name,
    Next,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Begin,
    AfterDeclarator,
    InPath(PathExpect),
    InVariableList(ListExpect),
    InQuery(QueryExpect),
    End,
}

impl State {
    pub fn is_end(&self) -> bool {
        matches!(self, State::End)
    }
}
