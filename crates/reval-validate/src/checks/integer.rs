//! Integer checks.

use reval_model::ViolationKind;

use crate::rules::{self, ParseError, Rule};

/// Check one integer value against a rule expression.
///
/// Returns at most one violation kind per invocation.
pub(crate) fn check_int(rule: &str, value: i64) -> Option<ViolationKind> {
    match rules::parse(rule) {
        Ok(Rule::None) => None,
        // Length applies to text only.
        Ok(Rule::Length(_)) => Some(ViolationKind::UnexpectedRule),
        Ok(Rule::Membership(tokens)) => check_membership(&tokens, value),
        Ok(Rule::Minimum(min)) => (value < min).then_some(ViolationKind::BelowMinimum),
        Ok(Rule::Maximum(max)) => (value > max).then_some(ViolationKind::AboveMaximum),
        Err(ParseError::UnknownRule) => Some(ViolationKind::UnexpectedRule),
        Err(ParseError::InvalidSyntax) => Some(ViolationKind::InvalidRuleSyntax),
        Err(ParseError::EmptyMembership) => Some(ViolationKind::NotInSet),
    }
}

/// Tokens are scanned in order: a match wins before a later malformed token
/// is ever looked at.
fn check_membership(tokens: &[&str], value: i64) -> Option<ViolationKind> {
    for token in tokens {
        let Ok(candidate) = token.parse::<i64>() else {
            return Some(ViolationKind::InvalidMembershipToken);
        };
        if candidate == value {
            return None;
        }
    }
    Some(ViolationKind::NotInSet)
}
