//! Extrapolation Consumer API
//!
//! Configuration builders, report rendering, and curve sampling for
//! callers of the extrapolation core.
//!
//! This crate provides:
//! - [`ConfigurationBuilder`] and JSON configuration loading
//! - [`PredictionReport`] and [`ExportRecord`] for displaying and exporting predictions
//! - [`sample_curve`] for drawing a trend curve one prediction at a time
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod curve;
pub mod report;

pub use config::{ConfigError, ConfigurationBuilder};
pub use curve::{sample_curve, CurveSample};
pub use report::{ExportRecord, PredictionReport};

// Re-export from core
pub use extrapolation_core::{
    classify, evaluator, interpolator_for, interpret, interpretation, narrate, narration, risk,
    select_nearest, selection, session, DissolvedOxygenClassifier, DividedDifference,
    ExtrapolationSession, Interpretation, Lagrange, NearestSelector, TransitionWarning, Trend,
};

// Re-export from SPI
pub use extrapolation_spi::{
    clamp_subset_size, Configuration, DataPoint, EvaluationTrace, ExtrapolationError,
    Interpolator, Method, Prediction, Result, RiskAssessment, RiskClassifier, RiskTier,
    SubsetSelector,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        sample_curve, ConfigurationBuilder, CurveSample, ExportRecord, PredictionReport,
    };
    pub use extrapolation_core::{
        classify, interpret, narrate, ExtrapolationSession, Interpretation,
    };
    pub use extrapolation_spi::{
        Configuration, DataPoint, ExtrapolationError, Interpolator, Method, Prediction, Result,
        RiskAssessment, RiskClassifier, RiskTier, SubsetSelector,
    };
}
