//! Trend interpretation
//!
//! Compares the latest observed value with a prediction and summarizes the
//! change in one paragraph.

use std::fmt;

use serde::{Deserialize, Serialize};

use extrapolation_spi::{RiskClassifier, RiskTier};

use crate::risk::{DissolvedOxygenClassifier, CAUTION_RANGE, DANGER_RANGE};

/// Changes smaller than this (in y units) count as stable
pub const STABLE_BAND: f64 = 0.1;

/// Direction of the predicted change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Stable,
    Rising,
    Dropping,
}

impl Trend {
    pub fn from_delta(delta: f64) -> Self {
        if delta.abs() < STABLE_BAND {
            Trend::Stable
        } else if delta > 0.0 {
            Trend::Rising
        } else {
            Trend::Dropping
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Stable => "Stable",
            Trend::Rising => "Rising",
            Trend::Dropping => "Dropping",
        };
        f.write_str(label)
    }
}

/// Warning raised when the prediction crosses a tier boundary downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionWarning {
    /// Currently SAFE, predicted below the CAUTION floor
    CautionCrossing,
    /// Predicted below the DANGER floor
    CriticalDrop,
}

impl fmt::Display for TransitionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TransitionWarning::CautionCrossing => "Crossing into Caution zone.",
            TransitionWarning::CriticalDrop => "Critical Drop.",
        };
        f.write_str(text)
    }
}

/// Structured comparison between a current reading and a prediction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    pub direction: Trend,
    /// `predicted_y - current_y`
    pub delta: f64,
    /// `predicted_x - current_x`
    pub horizon: f64,
    pub current_tier: RiskTier,
    pub predicted_tier: RiskTier,
    pub warning: Option<TransitionWarning>,
}

impl Interpretation {
    /// Compare readings using the dissolved-oxygen classifier
    pub fn new(current_x: f64, current_y: f64, predicted_x: f64, predicted_y: f64) -> Self {
        Self::with_classifier(
            &DissolvedOxygenClassifier,
            current_x,
            current_y,
            predicted_x,
            predicted_y,
        )
    }

    /// Compare readings, naming tiers with `classifier`
    pub fn with_classifier(
        classifier: &dyn RiskClassifier,
        current_x: f64,
        current_y: f64,
        predicted_x: f64,
        predicted_y: f64,
    ) -> Self {
        let delta = predicted_y - current_y;
        let current_tier = classifier.classify(current_y).tier;
        let predicted_tier = classifier.classify(predicted_y).tier;

        let warning = if predicted_y < DANGER_RANGE.0 {
            Some(TransitionWarning::CriticalDrop)
        } else if current_tier < RiskTier::Caution && predicted_y < CAUTION_RANGE.0 {
            Some(TransitionWarning::CautionCrossing)
        } else {
            None
        };

        Self {
            direction: Trend::from_delta(delta),
            delta,
            horizon: predicted_x - current_x,
            current_tier,
            predicted_tier,
            warning,
        }
    }
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Oxygen is {} by {:.2} mg/L over the next {:.2} hours. ",
            self.direction,
            self.delta.abs(),
            self.horizon
        )?;
        write!(
            f,
            "It is projected to shift from {} to {}. ",
            self.current_tier, self.predicted_tier
        )?;
        match self.warning {
            Some(warning) => write!(f, "Warning: {}", warning),
            None => write!(f, "Warning: None."),
        }
    }
}

/// One-paragraph trend summary between a current reading and a prediction
pub fn interpret(current_x: f64, current_y: f64, predicted_x: f64, predicted_y: f64) -> String {
    Interpretation::new(current_x, current_y, predicted_x, predicted_y).to_string()
}
