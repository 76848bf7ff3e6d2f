//! Rule expression parsing.
//!
//! A rule expression is matched against a fixed prefix table and the
//! remainder becomes the argument payload. The parser never sees field
//! values; value semantics live in the scalar checks.

const PREFIX_LENGTH: &str = "len:";
const PREFIX_MEMBERSHIP: &str = "in:";
const PREFIX_MINIMUM: &str = "min:";
const PREFIX_MAXIMUM: &str = "max:";

/// Literal rule token that requests recursive validation of a record field.
pub(crate) const RULE_INNER: &str = "inner";

/// A parsed rule: kind tag plus argument payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Rule<'a> {
    /// Empty expression; always passes.
    None,
    /// `len:` with its raw payload. The payload is parsed by the text check,
    /// which keeps the rule unexpected (not malformed) on integer fields.
    Length(&'a str),
    /// `in:` tokens in payload order.
    Membership(Vec<&'a str>),
    /// `min:` bound.
    Minimum(i64),
    /// `max:` bound.
    Maximum(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseError {
    /// No recognized prefix matched.
    UnknownRule,
    /// A `min:`/`max:` payload is not a base-10 integer.
    InvalidSyntax,
    /// `in:` with no tokens or a leading empty token. Reported downstream as
    /// not-in-set, never as a syntax error.
    EmptyMembership,
}

pub(crate) fn parse(expr: &str) -> Result<Rule<'_>, ParseError> {
    if expr.is_empty() {
        return Ok(Rule::None);
    }
    if let Some(payload) = expr.strip_prefix(PREFIX_LENGTH) {
        return Ok(Rule::Length(payload));
    }
    if let Some(payload) = expr.strip_prefix(PREFIX_MEMBERSHIP) {
        let tokens: Vec<&str> = payload.split(',').collect();
        if tokens.first().is_none_or(|token| token.is_empty()) {
            return Err(ParseError::EmptyMembership);
        }
        return Ok(Rule::Membership(tokens));
    }
    if let Some(payload) = expr.strip_prefix(PREFIX_MINIMUM) {
        return payload
            .parse()
            .map(Rule::Minimum)
            .map_err(|_| ParseError::InvalidSyntax);
    }
    if let Some(payload) = expr.strip_prefix(PREFIX_MAXIMUM) {
        return payload
            .parse()
            .map(Rule::Maximum)
            .map_err(|_| ParseError::InvalidSyntax);
    }
    Err(ParseError::UnknownRule)
}
