//! Dissolved-oxygen risk grading
//!
//! Thresholds in mg/L, boundaries inclusive:
//!
//! | Tier     | Range               |
//! |----------|---------------------|
//! | SAFE     | `y >= 6.0`          |
//! | CAUTION  | `4.0 <= y <= 5.9`   |
//! | DANGER   | `3.0 <= y <= 3.9`   |
//! | CRITICAL | everything else     |
//!
//! Values in the open gaps `(3.9, 4.0)` and `(5.9, 6.0)` fall through to
//! CRITICAL, as does NaN.

use extrapolation_spi::{RiskAssessment, RiskClassifier, RiskTier};

/// Lower bound of the SAFE band
pub const SAFE_MIN: f64 = 6.0;
/// Inclusive CAUTION band
pub const CAUTION_RANGE: (f64, f64) = (4.0, 5.9);
/// Inclusive DANGER band
pub const DANGER_RANGE: (f64, f64) = (3.0, 3.9);

/// Koi-pond dissolved-oxygen classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct DissolvedOxygenClassifier;

impl RiskClassifier for DissolvedOxygenClassifier {
    fn classify(&self, value: f64) -> RiskAssessment {
        classify(value)
    }
}

/// Tier for a dissolved-oxygen reading
pub fn tier_for(value: f64) -> RiskTier {
    if value >= SAFE_MIN {
        RiskTier::Safe
    } else if (CAUTION_RANGE.0..=CAUTION_RANGE.1).contains(&value) {
        RiskTier::Caution
    } else if (DANGER_RANGE.0..=DANGER_RANGE.1).contains(&value) {
        RiskTier::Danger
    } else {
        RiskTier::Critical
    }
}

/// Grade a dissolved-oxygen reading with advisory text
pub fn classify(value: f64) -> RiskAssessment {
    match tier_for(value) {
        RiskTier::Safe => RiskAssessment::new(
            RiskTier::Safe,
            "Optimal oxygen level",
            "Maintain current aeration",
            "#00FF00",
        ),
        RiskTier::Caution => RiskAssessment::new(
            RiskTier::Caution,
            "Oxygen slightly low",
            "Increase aeration and monitor closely",
            "#FFFF00",
        ),
        RiskTier::Danger => RiskAssessment::new(
            RiskTier::Danger,
            "Oxygen dangerously low",
            "Add aeration immediately and reduce stocking stressors",
            "#FFA500",
        ),
        RiskTier::Critical => RiskAssessment::new(
            RiskTier::Critical,
            "Oxygen critically low",
            "Activate aerators immediately and consider emergency oxygenation",
            "#FF0000",
        ),
    }
}
