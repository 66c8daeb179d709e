//! Core error types for taskdeck-core.
//!
//! The engine splits failure handling in two: strict validation at the
//! system boundary (reject, never coerce) and lenient internal derivations
//! (clamp or degrade, never fail). The types here cover the first half;
//! the second half never produces an error at all.

use thiserror::Error;

/// Top-level error type for taskdeck-core.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Date input errors
    #[error("Date error: {0}")]
    Date(#[from] DateError),
}

/// Validation errors raised at the system boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Numeric input outside its closed range, or not a finite integer
    #[error("Invalid value for '{field}': {value} (expected an integer in {min}..={max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: i64,
        max: i64,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for {collection} (length: {len})")]
    OutOfBounds {
        collection: &'static str,
        index: usize,
        len: usize,
    },
}

/// Date input errors.
///
/// A date that fails to parse downgrades the one task carrying it to the
/// dateless treatment; callers absorb this error locally instead of letting
/// a single bad record abort a whole ordering pass.
#[derive(Error, Debug)]
pub enum DateError {
    /// Input could not be parsed as a calendar date
    #[error("Unparseable date input: {0:?}")]
    Unparseable(String),
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
