//! Error types for contract violations.
//!
//! The engine never raises for malformed-but-well-typed input; it degrades to
//! explicit "insufficient data" states instead. The only failure surfaced to
//! callers is a contract violation at construction time, and it names the
//! offending field so the caller can decide whether to drop or correct the
//! record.

use thiserror::Error;

/// Validation failures raised when constructing a trust declaration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Agent identifier is empty or whitespace-only
    #[error("declaration is missing an agent id")]
    MissingAgentId,

    /// A normalized score fell outside the unit interval
    #[error("{field} must be between 0.0 and 1.0, got {value}")]
    ScoreOutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },
}

/// Result alias for fallible core operations.
pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
