use thiserror::Error;

use crate::violation::Violations;

/// Top-level validation failure.
///
/// The two shapes are load-bearing: a recursive invocation splices a
/// `Violations` failure into its parent and wraps any other failure shape as
/// a single opaque violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input's outer shape is not a record; no field was examined.
    #[error("value is not a record")]
    NotARecord,
    /// The complete, ordered set of violations found in one pass.
    #[error("{0}")]
    Violations(Violations),
}

pub type Result<T> = std::result::Result<T, Error>;
