//! Risk assessment types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete risk tier, ordered from safest to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Safe,
    Caution,
    Danger,
    Critical,
}

impl RiskTier {
    /// Upper-case tier name as shown to users
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Safe => "SAFE",
            RiskTier::Caution => "CAUTION",
            RiskTier::Danger => "DANGER",
            RiskTier::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk tier for a predicted value, with advisory text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,
    /// Short description of the condition
    pub message: String,
    /// Recommended action
    pub action: String,
    /// Display color as a `#RRGGBB` hex string
    pub color: String,
}

impl RiskAssessment {
    pub fn new(
        tier: RiskTier,
        message: impl Into<String>,
        action: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            tier,
            message: message.into(),
            action: action.into(),
            color: color.into(),
        }
    }
}
