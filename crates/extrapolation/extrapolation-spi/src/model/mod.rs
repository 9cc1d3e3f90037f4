//! Model module containing data types for extrapolation

mod configuration;
mod data_point;
mod method;
mod prediction;
mod risk;
mod trace;

pub use configuration::{clamp_subset_size, Configuration, MIN_SUBSET_SIZE};
pub use data_point::DataPoint;
pub use method::Method;
pub use prediction::Prediction;
pub use risk::{RiskAssessment, RiskTier};
pub use trace::{
    DividedDifferenceStep, DividedDifferenceTrace, EvaluationTrace, HornerStep, LagrangeTerm,
    LagrangeTrace,
};
