//! Field dispatch, recursive invocation, and violation aggregation.

use reval_model::{Error, Field, Record, Result, Value, Violation, ViolationKind, Violations};
use tracing::{debug, trace};

use crate::checks::{check_int, check_text};
use crate::rules::RULE_INNER;

/// Validate a value against the rules attached to its fields.
///
/// The outer shape must be a record; anything else fails wholly with
/// [`Error::NotARecord`] before any field is examined. Otherwise every field
/// is checked in declaration order (no short-circuiting across fields) and
/// the complete ordered violation list is the failure value. An empty list is
/// never returned as a failure.
pub fn validate(value: &Value) -> Result<()> {
    let Value::Record(record) = value else {
        return Err(Error::NotARecord);
    };
    let violations = validate_record(record);
    debug!(violations = violations.len(), "validation pass complete");
    if violations.is_empty() {
        Ok(())
    } else {
        Err(Error::Violations(violations))
    }
}

fn validate_record(record: &Record) -> Violations {
    let mut violations = Violations::new();
    for field in &record.fields {
        check_field(field, &mut violations);
    }
    violations
}

fn check_field(field: &Field, violations: &mut Violations) {
    // Rules on non-exported fields are rejected before shape dispatch.
    if !field.exported && !field.rule.is_empty() {
        violations.add(Violation::new(
            &field.name,
            ViolationKind::RuleOnPrivateField,
        ));
        return;
    }
    match &field.value {
        Value::Int(value) => {
            if let Some(kind) = check_int(&field.rule, *value) {
                violations.add(Violation::new(&field.name, kind));
            }
        }
        Value::Text(value) => {
            if let Some(kind) = check_text(&field.rule, value) {
                violations.add(Violation::new(&field.name, kind));
            }
        }
        Value::IntSeq(items) => {
            for (index, value) in items.iter().enumerate() {
                if let Some(kind) = check_int(&field.rule, *value) {
                    violations.add(Violation::new(element_path(&field.name, index), kind));
                }
            }
        }
        Value::TextSeq(items) => {
            for (index, value) in items.iter().enumerate() {
                if let Some(kind) = check_text(&field.rule, value) {
                    violations.add(Violation::new(element_path(&field.name, index), kind));
                }
            }
        }
        Value::Record(_) => {
            // Rules other than the recursion token are ignored on records,
            // unlike on scalars where an unmatched rule is a violation.
            if field.rule == RULE_INNER {
                check_nested(field, violations);
            }
        }
        Value::Unsupported => {
            trace!(field = %field.name, "skipping field of unsupported shape");
        }
    }
}

/// Run the whole engine on a nested record field and splice the outcome.
fn check_nested(field: &Field, violations: &mut Violations) {
    match validate(&field.value) {
        Ok(()) => {}
        // Nested violations are flattened one level into the parent list,
        // re-rooted under this field's path. No wrapper entry is added.
        Err(Error::Violations(nested)) => {
            violations.extend(
                nested
                    .into_iter()
                    .map(|violation| violation.prefixed(&field.name)),
            );
        }
        // Any other failure shape becomes a single opaque violation.
        Err(other) => {
            violations.add(Violation::new(
                &field.name,
                ViolationKind::Opaque(other.to_string()),
            ));
        }
    }
}

fn element_path(name: &str, index: usize) -> String {
    format!("{name}[{index}]")
}
