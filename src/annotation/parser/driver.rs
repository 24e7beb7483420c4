//! Single-pass state machine over the token stream
//!
//! The result is accumulated in a [`Pending`] value and only turned into
//! [`Metadata`] once the machine reaches [`State::End`].

use super::states::{ListExpect, PathExpect, QueryExpect, State};
use crate::annotation::ast::{
    HttpMethod, Metadata, MultiVariableInfo, ParseError, RouteInfo, SlashContext, VariableInfo,
};
use crate::annotation::lexer::Token;
use tracing::trace;

/// Metadata under construction
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Route(RouteInfo),
    Variable(VariableInfo),
    MultiVariable(MultiVariableInfo),
}

impl From<Pending> for Metadata {
    fn from(pending: Pending) -> Self {
        match pending {
            Pending::Route(route) => Metadata::Route(route),
            Pending::Variable(variable) => Metadata::Variable(variable),
            Pending::MultiVariable(variables) => Metadata::MultiVariable(variables),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Driver {
    state: State,
    pending: Option<Pending>,
}

impl Driver {
    pub fn new() -> Self {
        Self {
            state: State::Begin,
            pending: None,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Feed one token, moving to the next state or failing
    pub fn advance(&mut self, token: Token) -> Result<(), ParseError> {
        trace!(state = ?self.state, %token, "annotation transition");
        self.state = self.transition(token)?;
        Ok(())
    }

    /// Hand back the finished metadata
    pub fn finish(self) -> Result<Metadata, ParseError> {
        if !self.state.is_end() {
            return Err(ParseError::internal(format!(
                "Token stream ended in state {:?}",
                self.state
            )));
        }
        self.pending
            .map(Metadata::from)
            .ok_or_else(|| ParseError::internal("Reached the end without any metadata"))
    }

    fn transition(&mut self, token: Token) -> Result<State, ParseError> {
        use ListExpect as L;
        use PathExpect as P;
        use QueryExpect as Q;

        match (self.state, token) {
            (State::Begin, Token::Declarator) => Ok(State::AfterDeclarator),
            (State::Begin, other) => Err(ParseError::internal(format!(
                "Annotation must open with '>', found {}",
                other
            ))),

            (State::AfterDeclarator, Token::Identifier(keyword)) => {
                let method = HttpMethod::from_keyword(&keyword);
                if !method.is_compatible() {
                    return Err(ParseError::MissingHttpMethod);
                }
                self.start(Pending::Route(RouteInfo::new(method)))?;
                Ok(State::InPath(P::Slash))
            }
            (State::AfterDeclarator, Token::Colon) => Ok(State::InVariableList(L::Name)),
            (State::AfterDeclarator, Token::Slash | Token::EndOfInput) => {
                Err(ParseError::MissingHttpMethod)
            }
            (State::AfterDeclarator, other) => Err(ParseError::unexpected(other)),

            (State::InPath(P::Slash), Token::Slash) => Ok(State::InPath(P::Segment)),
            (State::InPath(P::Slash), Token::Query | Token::EndOfInput) => {
                Err(ParseError::MissingPathSegment)
            }
            (State::InPath(P::Slash), other) => Err(ParseError::unexpected(other)),

            (State::InPath(P::Segment), Token::Identifier(segment)) => {
                self.route()?.push_literal(segment);
                Ok(State::InPath(P::Next))
            }
            (State::InPath(P::Segment), Token::Colon) => Ok(State::InPath(P::Variable)),
            (State::InPath(P::Segment), _) => Err(ParseError::MissingPathSegment),

            (State::InPath(P::Variable), Token::Identifier(variable)) => {
                self.route()?.push_variable(variable);
                Ok(State::InPath(P::Next))
            }
            (State::InPath(P::Variable), _) => Err(ParseError::DanglingColon),

            (State::InPath(P::Next), Token::Slash) => Ok(State::InPath(P::Segment)),
            (State::InPath(P::Next), Token::Query) => Ok(State::InQuery(Q::Colon)),
            (State::InPath(P::Next), Token::EndOfInput) => Ok(State::End),
            (State::InPath(P::Next), other) => Err(ParseError::unexpected(other)),

            (State::InQuery(Q::Name), Token::Identifier(argument)) => {
                self.route()?.push_query(argument);
                Ok(State::InQuery(Q::Next))
            }
            (State::InQuery(Q::Name), _) => Err(ParseError::DanglingColon),
            (State::InQuery(_), Token::Slash) => {
                Err(ParseError::InvalidSlashUsage(SlashContext::Query))
            }
            (State::InQuery(_), Token::Colon) => Ok(State::InQuery(Q::Name)),
            (State::InQuery(Q::Colon), _) => Err(ParseError::MissingQueryArgument),
            (State::InQuery(Q::Next), Token::EndOfInput) => Ok(State::End),
            (State::InQuery(Q::Next), other) => Err(ParseError::unexpected(other)),

            (State::InVariableList(L::Name), Token::Identifier(name)) => {
                self.bind(name)?;
                Ok(State::InVariableList(L::Next))
            }
            (State::InVariableList(L::Name), _) => Err(ParseError::DanglingColon),
            (State::InVariableList(L::Next), Token::Colon) => Ok(State::InVariableList(L::Name)),
            (State::InVariableList(L::Next), Token::Slash) => {
                Err(ParseError::InvalidSlashUsage(SlashContext::Variables))
            }
            (State::InVariableList(L::Next), Token::EndOfInput) => Ok(State::End),
            (State::InVariableList(L::Next), other) => Err(ParseError::unexpected(other)),

            (State::End, other) => Err(ParseError::internal(format!(
                "Received {} after the end of input",
                other
            ))),
        }
    }

    fn start(&mut self, pending: Pending) -> Result<(), ParseError> {
        if self.pending.is_some() {
            return Err(ParseError::internal("Expected none declared identifiers."));
        }
        self.pending = Some(pending);
        Ok(())
    }

    fn route(&mut self) -> Result<&mut RouteInfo, ParseError> {
        match self.pending.as_mut() {
            Some(Pending::Route(route)) => Ok(route),
            other => Err(ParseError::internal(format!(
                "Expected a route under construction, found {:?}",
                other
            ))),
        }
    }

    /// Bind a declared variable name, promoting a single name to a list on the second one
    fn bind(&mut self, name: String) -> Result<(), ParseError> {
        self.pending = match self.pending.take() {
            None => Some(Pending::Variable(VariableInfo::new(name))),
            Some(Pending::Variable(variable)) => Some(Pending::MultiVariable(variable.promote(name))),
            Some(Pending::MultiVariable(mut variables)) => {
                variables.push(name);
                Some(Pending::MultiVariable(variables))
            }
            Some(Pending::Route(_)) => {
                return Err(ParseError::internal(
                    "Variable declared while a route is under construction",
                ))
            }
        };
        Ok(())
    }
}
