//! Extrapolation error types
//!
//! Every failure is raised where it is detected and travels unchanged
//! through the session up to the caller.

use thiserror::Error;

/// Result type alias for extrapolation operations
pub type Result<T> = std::result::Result<T, ExtrapolationError>;

/// Errors that can occur while selecting points or evaluating a polynomial
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtrapolationError {
    /// Fewer than two samples, or x and y sample counts differ
    #[error("Degenerate input: need at least 2 samples with matching lengths, got {x_len} x-values and {y_len} y-values")]
    DegenerateInput { x_len: usize, y_len: usize },

    /// Two samples share an x-value, producing a zero denominator
    #[error("Duplicate abscissa: samples {first} and {second} share x = {x}")]
    DuplicateAbscissa { first: usize, second: usize, x: f64 },

    /// Not enough collected points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Method name not recognized while parsing external text
    #[error("Unknown extrapolation method: {0}")]
    UnknownMethod(String),

    /// Extrapolation requested before a subset was selected
    #[error("No subset selected: select a subset before extrapolating")]
    SubsetNotSelected,

    /// Extrapolation target x has not been configured
    #[error("Extrapolation target is not set")]
    TargetNotSet,
}
