//! Value graph for records under validation.
//!
//! A record is a fixed, ordered list of field descriptors; each field carries
//! its name, visibility, raw rule expression, and runtime value. Field shape
//! is a closed tagged variant so dispatch stays an exhaustive match.

use serde::{Deserialize, Serialize};

/// Shape classification of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    Int,
    Text,
    IntSeq,
    TextSeq,
    Record,
    Unsupported,
}

impl FieldKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Int => "integer",
            Self::Text => "text",
            Self::IntSeq => "integer sequence",
            Self::TextSeq => "text sequence",
            Self::Record => "record",
            Self::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A runtime value in one of the shapes the engine understands.
///
/// Anything outside this closed set is `Unsupported`: rules attached to such
/// fields are never applied and never reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    Int(i64),
    Text(String),
    IntSeq(Vec<i64>),
    TextSeq(Vec<String>),
    Record(Record),
    Unsupported,
}

impl Value {
    /// Shape tag of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Int(_) => FieldKind::Int,
            Self::Text(_) => FieldKind::Text,
            Self::IntSeq(_) => FieldKind::IntSeq,
            Self::TextSeq(_) => FieldKind::TextSeq,
            Self::Record(_) => FieldKind::Record,
            Self::Unsupported => FieldKind::Unsupported,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<i64>> for Value {
    fn from(values: Vec<i64>) -> Self {
        Self::IntSeq(values)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Self::TextSeq(values)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

/// One record field: name, visibility, rule expression, and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name as declared by the caller.
    pub name: String,
    /// Whether the field is externally visible. Rules on non-exported fields
    /// are rejected.
    pub exported: bool,
    /// Raw rule expression; the empty string means no check.
    pub rule: String,
    /// Runtime value of the field.
    pub value: Value,
}

impl Field {
    /// Create an exported field with no rule.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            exported: true,
            rule: String::new(),
            value: value.into(),
        }
    }

    /// Attach a rule expression.
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    /// Mark the field as not externally visible.
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

/// A record value: named fields in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Fields in declaration order; validation walks them in this order.
    pub fields: Vec<Field>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, preserving declaration order.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}
