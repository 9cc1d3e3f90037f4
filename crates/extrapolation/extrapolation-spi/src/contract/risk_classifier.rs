//! Risk classification trait

use crate::model::RiskAssessment;

/// Maps a predicted value to a risk tier with advisory text.
///
/// Classification is total: every `f64`, including negatives, infinities,
/// and NaN, maps to some tier.
pub trait RiskClassifier: Send + Sync {
    fn classify(&self, value: f64) -> RiskAssessment;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RiskTier;

    /// Mock implementation: single threshold
    struct ThresholdClassifier {
        threshold: f64,
    }

    impl RiskClassifier for ThresholdClassifier {
        fn classify(&self, value: f64) -> RiskAssessment {
            if value >= self.threshold {
                RiskAssessment::new(RiskTier::Safe, "ok", "none", "#00FF00")
            } else {
                RiskAssessment::new(RiskTier::Critical, "low", "act", "#FF0000")
            }
        }
    }

    #[test]
    fn test_mock_classifier_threshold() {
        let classifier = ThresholdClassifier { threshold: 5.0 };
        assert_eq!(classifier.classify(5.0).tier, RiskTier::Safe);
        assert_eq!(classifier.classify(4.99).tier, RiskTier::Critical);
        assert_eq!(classifier.classify(f64::NAN).tier, RiskTier::Critical);
    }

    #[test]
    fn test_classifier_as_trait_object() {
        let classifier: Box<dyn RiskClassifier> = Box::new(ThresholdClassifier { threshold: 0.0 });
        assert_eq!(classifier.classify(1.0).color, "#00FF00");
    }
}
