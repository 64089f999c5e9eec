//! Workspace error type.
//!
//! Sub-crates either return `EpiError` directly or define their own enum and
//! convert into it via `From`.  Configuration and invariant errors are fatal:
//! callers abort the run rather than retrying.

use thiserror::Error;

use crate::PersonId;

/// The top-level error type for `epi-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum EpiError {
    /// Intensity matrix shape does not match the grouping count, a group
    /// spec has no configured intensities, or similar setup problems.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Weighted choice was invoked with no items or an all-zero weight sum.
    /// Callers guard against this, so seeing it means an invariant broke.
    #[error("weighted choice over an empty set or a zero total weight")]
    EmptyOrZeroWeight,

    #[error("invalid numeric input: {what} = {value}")]
    InvalidNumericInput { what: &'static str, value: f64 },

    #[error("person {0} not found")]
    PersonNotFound(PersonId),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `epi-*` crates.
pub type EpiResult<T> = Result<T, EpiError>;

/// Return `value` if it is finite and `>= 0`, otherwise
/// [`EpiError::InvalidNumericInput`] tagged with `what`.
#[inline]
pub fn non_negative(what: &'static str, value: f64) -> EpiResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(EpiError::InvalidNumericInput { what, value })
    }
}
