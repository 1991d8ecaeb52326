//! Estimation failure taxonomy.
//!
//! Every variant is a synchronous input-validation failure: non-retryable by
//! the estimator itself, always safe to retry from the caller with corrected
//! input. No variant leaves partial state behind, since score application
//! only happens after a successful result.

use thiserror::Error;

pub type EstimateResult<T> = Result<T, EstimateError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Iteration count was not a positive integer (zero, negative, or
    /// non-numeric text at the parse boundary).
    #[error("iteration count must be a positive integer")]
    InvalidInput,

    /// Iteration count exceeds the configured ceiling.
    #[error("iteration count {requested} exceeds the maximum of {max}")]
    IterationCountTooLarge { requested: u64, max: u64 },

    /// Method identifier is not one of the known methods. Unknown names are
    /// rejected, never silently mapped to a default.
    #[error("unknown estimation method `{0}`")]
    UnknownMethod(String),
}
