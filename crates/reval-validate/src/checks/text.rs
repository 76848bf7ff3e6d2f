//! Text checks.
//!
//! Length-based rules compare byte length (`str::len`).

use reval_model::ViolationKind;

use crate::rules::{self, ParseError, Rule};

/// Check one text value against a rule expression.
///
/// Returns at most one violation kind per invocation.
pub(crate) fn check_text(rule: &str, value: &str) -> Option<ViolationKind> {
    match rules::parse(rule) {
        Ok(Rule::None) => None,
        Ok(Rule::Length(payload)) => check_length(payload, value),
        Ok(Rule::Membership(tokens)) => {
            if tokens.iter().any(|token| *token == value) {
                None
            } else {
                Some(ViolationKind::NotInSet)
            }
        }
        Ok(Rule::Minimum(min)) => ((value.len() as i64) < min).then_some(ViolationKind::BelowMinimum),
        Ok(Rule::Maximum(max)) => ((value.len() as i64) > max).then_some(ViolationKind::AboveMaximum),
        Err(ParseError::UnknownRule) => Some(ViolationKind::UnexpectedRule),
        Err(ParseError::InvalidSyntax) => Some(ViolationKind::InvalidRuleSyntax),
        Err(ParseError::EmptyMembership) => Some(ViolationKind::NotInSet),
    }
}

fn check_length(payload: &str, value: &str) -> Option<ViolationKind> {
    let Ok(expected) = payload.parse::<i64>() else {
        return Some(ViolationKind::InvalidRuleSyntax);
    };
    (value.len() as i64 != expected).then_some(ViolationKind::WrongLength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_compares_exactly() {
        assert_eq!(check_text("len:5", "hello"), None);
        assert_eq!(check_text("len:5", "hell"), Some(ViolationKind::WrongLength));
        assert_eq!(
            check_text("len:abc", "hello"),
            Some(ViolationKind::InvalidRuleSyntax)
        );
    }

    #[test]
    fn membership_compares_literal_tokens() {
        assert_eq!(check_text("in:admin,guest", "guest"), None);
        assert_eq!(
            check_text("in:admin,guest", "root"),
            Some(ViolationKind::NotInSet)
        );
    }

    #[test]
    fn bounds_compare_length() {
        assert_eq!(check_text("min:3", "abc"), None);
        assert_eq!(check_text("min:3", "ab"), Some(ViolationKind::BelowMinimum));
        assert_eq!(check_text("max:2", "ab"), None);
        assert_eq!(check_text("max:2", "abc"), Some(ViolationKind::AboveMaximum));
    }

    #[test]
    fn empty_membership_reads_as_not_in_set() {
        assert_eq!(check_text("in:", "anything"), Some(ViolationKind::NotInSet));
        assert_eq!(check_text("in:,a", "a"), Some(ViolationKind::NotInSet));
    }
}
