//! Declarative rule validation for record values.
//!
//! Each field of a [`reval_model::Record`] may carry a rule expression:
//! `len:<n>` (text length), `in:<v1>,<v2>,...` (membership), `min:<n>` /
//! `max:<n>` (bounds on value or text length), or the literal `inner` to
//! recurse into a nested record. Validation walks every field in declaration
//! order and returns the complete ordered list of violations, never just the
//! first.
//!
//! ```
//! use reval_model::{Field, Record, Value};
//! use reval_validate::validate;
//!
//! let record = Record::new()
//!     .with_field(Field::new("Name", "ada").with_rule("len:3"))
//!     .with_field(Field::new("Age", 36).with_rule("min:18"));
//! assert!(validate(&Value::Record(record)).is_ok());
//! ```

mod checks;
mod engine;
mod report;
mod rules;

pub use engine::validate;
pub use report::{ViolationJson, ViolationReportPayload, write_violation_report_json};
