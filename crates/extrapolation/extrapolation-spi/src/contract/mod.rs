//! Contract module containing trait definitions for extrapolation
//!
//! - [`Interpolator`]: Evaluates an interpolating polynomial
//! - [`SubsetSelector`]: Chooses the points a polynomial is built from
//! - [`RiskClassifier`]: Grades a predicted value

mod interpolator;
mod risk_classifier;
mod subset_selector;

pub use interpolator::Interpolator;
pub use risk_classifier::RiskClassifier;
pub use subset_selector::SubsetSelector;
