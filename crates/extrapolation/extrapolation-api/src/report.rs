//! Prediction reports
//!
//! [`PredictionReport`] renders a session's prediction log for display.
//! [`ExportRecord`] flattens a single prediction for plain-text or JSON export.

use std::fmt;

use extrapolation_core::ExtrapolationSession;
use extrapolation_spi::{Configuration, Method, Prediction, RiskTier};
use serde::{Deserialize, Serialize};

/// Display view over a prediction log
#[derive(Debug, Clone, Copy)]
pub struct PredictionReport<'a> {
    config: &'a Configuration,
    predictions: &'a [Prediction],
}

impl<'a> PredictionReport<'a> {
    pub fn new(config: &'a Configuration, predictions: &'a [Prediction]) -> Self {
        Self {
            config,
            predictions,
        }
    }

    pub fn from_session(session: &'a ExtrapolationSession) -> Self {
        Self::new(session.config(), session.predictions())
    }
}

impl fmt::Display for PredictionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(46);
        writeln!(f, "{}", rule)?;
        writeln!(f, "{:^46}", "Extrapolated Forecast Curve")?;
        writeln!(f, "{}", rule)?;

        if self.predictions.is_empty() {
            return writeln!(f, "No predictions have been generated yet.");
        }

        let x_label = &self.config.x_label;
        let y_label = &self.config.y_label;
        writeln!(f, "X-Axis: {} | Y-Axis: {}", x_label, y_label)?;
        writeln!(f)?;

        for (i, prediction) in self.predictions.iter().enumerate() {
            writeln!(f, "Prediction {}:", i + 1)?;
            writeln!(
                f,
                "  Method Used: {} (Subset Size: {})",
                prediction.method, prediction.subset_size
            )?;
            writeln!(f, "  {} (X-Value): {:.4}", x_label, prediction.x)?;
            writeln!(f, "  {} (Predicted Y-Value): {:.4}", y_label, prediction.y)?;
            writeln!(
                f,
                "  DO Risk Assessment: {} - {}",
                prediction.risk.tier, prediction.risk.message
            )?;
            writeln!(f, "  Recommended Action: {}", prediction.risk.action)?;
            writeln!(f, "{}", "-".repeat(40))?;
        }

        Ok(())
    }
}

/// Flat record of one prediction for export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRecord {
    pub x_label: String,
    pub y_label: String,
    pub method: Method,
    pub subset_size: usize,
    pub x: f64,
    pub y: f64,
    pub risk: RiskTier,
    pub risk_message: String,
    pub risk_action: String,
    pub narrative: String,
}

impl ExportRecord {
    pub fn new(config: &Configuration, prediction: &Prediction) -> Self {
        Self {
            x_label: config.x_label.clone(),
            y_label: config.y_label.clone(),
            method: prediction.method,
            subset_size: prediction.subset_size,
            x: prediction.x,
            y: prediction.y,
            risk: prediction.risk.tier,
            risk_message: prediction.risk.message.clone(),
            risk_action: prediction.risk.action.clone(),
            narrative: prediction.narrative.clone(),
        }
    }

    /// Record for the session's most recent prediction
    pub fn latest(session: &ExtrapolationSession) -> Option<Self> {
        session
            .latest_prediction()
            .map(|prediction| Self::new(session.config(), prediction))
    }

    /// Plain-text export: summary followed by the full derivation
    pub fn to_text(&self) -> String {
        format!(
            "SmartTrend Extrapolation Result\n\
             Method: {}\n\
             Subset Size: {}\n\
             {} (X): {:.4}\n\
             {} (Predicted Y): {:.4}\n\
             Risk: {} - {}\n\
             Action: {}\n\n\
             {}\n",
            self.method,
            self.subset_size,
            self.x_label,
            self.x,
            self.y_label,
            self.y,
            self.risk,
            self.risk_message,
            self.risk_action,
            self.narrative
        )
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
