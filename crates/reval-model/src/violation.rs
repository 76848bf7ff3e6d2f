//! Violation types and the ordered violation list.
//!
//! Callers match on [`ViolationKind`] rather than comparing message text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What went wrong for a single field or sequence element.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A non-empty rule expression on a field that is not externally visible.
    #[error("rule on non-exported field is not allowed")]
    RuleOnPrivateField,
    /// The rule expression matched no recognized rule.
    #[error("unexpected rule")]
    UnexpectedRule,
    /// A numeric rule argument failed to parse.
    #[error("invalid rule syntax")]
    InvalidRuleSyntax,
    /// Text length differs from the exact length the rule demands.
    #[error("wrong length")]
    WrongLength,
    /// Value matched none of the membership tokens. Also covers a malformed
    /// membership list: an empty `in:` payload reads as "not in set", never
    /// as a syntax error.
    #[error("value not in set")]
    NotInSet,
    /// Value (or text length) is under the `min:` bound.
    #[error("below minimum")]
    BelowMinimum,
    /// Value (or text length) is over the `max:` bound.
    #[error("above maximum")]
    AboveMaximum,
    /// An `in:` token on an integer field is not itself an integer.
    #[error("invalid membership token")]
    InvalidMembershipToken,
    /// A nested validation failed with something other than a violation
    /// list; the cause is carried as rendered text.
    #[error("{0}")]
    Opaque(String),
}

/// One reported validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Path of the offending field: `parent.child` for spliced nested
    /// violations, `name[index]` for sequence elements.
    pub field: String,
    /// Failure kind.
    pub kind: ViolationKind,
}

impl Violation {
    pub fn new(field: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    /// The same violation re-rooted under a parent field path.
    pub fn prefixed(&self, parent: &str) -> Self {
        Self {
            field: format!("{parent}.{}", self.field),
            kind: self.kind.clone(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// Ordered list of violations.
///
/// Insertion order is field declaration order (element order within sequence
/// fields); nested-record violations appear inline where the recursion
/// happened. An empty list is never handed back as a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violations {
    pub entries: Vec<Violation>,
}

impl Violations {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation, preserving order.
    pub fn add(&mut self, violation: Violation) {
        self.entries.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.entries.iter()
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for entry in &self.entries {
            if !first {
                f.write_str(". ")?;
            }
            write!(f, "{entry}")?;
            first = false;
        }
        Ok(())
    }
}

impl Extend<Violation> for Violations {
    fn extend<T: IntoIterator<Item = Violation>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
