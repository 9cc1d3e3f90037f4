//! Extrapolation Core
//!
//! Core implementations for polynomial extrapolation: the Lagrange and
//! Newton divided-difference evaluators, nearest-point subset selection,
//! dissolved-oxygen risk grading, derivation narration, trend
//! interpretation, and the [`ExtrapolationSession`] that ties them together.

pub mod evaluator;
pub mod interpretation;
pub mod narration;
pub mod risk;
pub mod selection;
pub mod session;

// Re-export SPI items for implementations
pub use extrapolation_spi::{
    clamp_subset_size, Configuration, DataPoint, EvaluationTrace, ExtrapolationError,
    Interpolator, Method, Prediction, Result, RiskAssessment, RiskClassifier, RiskTier,
    SubsetSelector,
};

// Re-export main types
pub use evaluator::{interpolator_for, DividedDifference, Lagrange};
pub use interpretation::{interpret, Interpretation, TransitionWarning, Trend};
pub use narration::narrate;
pub use risk::{classify, DissolvedOxygenClassifier};
pub use selection::{select_nearest, NearestSelector};
pub use session::ExtrapolationSession;
