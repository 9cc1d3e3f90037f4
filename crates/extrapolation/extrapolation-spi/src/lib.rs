//! Extrapolation Service Provider Interface
//!
//! Defines the error taxonomy, data model, and contract traits shared by
//! every layer of the polynomial extrapolation stack:
//!
//! - [`Interpolator`]: Evaluates the interpolating polynomial at a target x
//! - [`SubsetSelector`]: Picks which collected points feed the polynomial
//! - [`RiskClassifier`]: Maps a predicted value to a discrete risk tier
//! - [`ExtrapolationError`]: Standardized error type for all operations
//! - [`Result`]: Convenient result type alias

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Interpolator, RiskClassifier, SubsetSelector};
pub use error::{ExtrapolationError, Result};
pub use model::{
    clamp_subset_size, Configuration, DataPoint, DividedDifferenceStep, DividedDifferenceTrace,
    EvaluationTrace, HornerStep, LagrangeTerm, LagrangeTrace, Method, Prediction, RiskAssessment,
    RiskTier, MIN_SUBSET_SIZE,
};
