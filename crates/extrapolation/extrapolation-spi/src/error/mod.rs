//! Error types for extrapolation operations
//!
//! This module provides the [`ExtrapolationError`] enum and [`Result`] type alias
//! shared by evaluators, selectors, and the session.

mod extrapolation_error;

pub use extrapolation_error::{ExtrapolationError, Result};
