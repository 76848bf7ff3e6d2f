pub mod error;
pub mod value;
pub mod violation;

pub use error::{Error, Result};
pub use value::{Field, FieldKind, Record, Value};
pub use violation::{Violation, ViolationKind, Violations};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violations_render_joined() {
        let mut violations = Violations::new();
        violations.add(Violation::new("Name", ViolationKind::WrongLength));
        violations.add(Violation::new("Age", ViolationKind::BelowMinimum));
        assert_eq!(violations.len(), 2);
        assert!(!violations.is_empty());
        assert_eq!(
            violations.to_string(),
            "Name: wrong length. Age: below minimum"
        );
    }

    #[test]
    fn violation_prefixed_reroots_path() {
        let violation = Violation::new("Len", ViolationKind::WrongLength);
        assert_eq!(violation.prefixed("Inner").field, "Inner.Len");
    }

    #[test]
    fn violations_serialize() {
        let mut violations = Violations::new();
        violations.add(Violation::new("Code", ViolationKind::NotInSet));
        violations.add(Violation::new(
            "Inner",
            ViolationKind::Opaque("value is not a record".to_string()),
        ));
        let json = serde_json::to_string(&violations).expect("serialize violations");
        let round: Violations = serde_json::from_str(&json).expect("deserialize violations");
        assert_eq!(round, violations);
    }

    #[test]
    fn value_kind_classification() {
        assert_eq!(Value::from(1).kind(), FieldKind::Int);
        assert_eq!(Value::from("a").kind(), FieldKind::Text);
        assert_eq!(Value::from(vec![1i64]).kind(), FieldKind::IntSeq);
        assert_eq!(
            Value::from(vec!["a".to_string()]).kind(),
            FieldKind::TextSeq
        );
        assert_eq!(Value::from(Record::new()).kind(), FieldKind::Record);
        assert_eq!(Value::Unsupported.kind(), FieldKind::Unsupported);
    }

    #[test]
    fn field_builder_defaults() {
        let field = Field::new("Age", 42);
        assert!(field.exported);
        assert_eq!(field.rule, "");

        let field = Field::new("Age", 42).with_rule("min:18").private();
        assert!(!field.exported);
        assert_eq!(field.rule, "min:18");
    }

    #[test]
    fn error_renders_violation_list() {
        let mut violations = Violations::new();
        violations.add(Violation::new("Code", ViolationKind::UnexpectedRule));
        let error = Error::Violations(violations);
        assert_eq!(error.to_string(), "Code: unexpected rule");
        assert_eq!(Error::NotARecord.to_string(), "value is not a record");
    }
}
