//! Stored prediction record

use serde::{Deserialize, Serialize};

use crate::model::{Method, RiskAssessment};

/// One entry in a session's append-only prediction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Target x the polynomial was evaluated at
    pub x: f64,
    /// Predicted value
    pub y: f64,
    pub method: Method,
    /// Number of points the polynomial was built from
    pub subset_size: usize,
    pub risk: RiskAssessment,
    /// Step-by-step derivation of `y`
    pub narrative: String,
}
