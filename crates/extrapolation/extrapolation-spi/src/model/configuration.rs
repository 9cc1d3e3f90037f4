//! Extrapolation configuration

use serde::{Deserialize, Serialize};

use crate::model::Method;

/// Smallest subset an interpolating polynomial can be built from
pub const MIN_SUBSET_SIZE: usize = 2;

/// Clamp a requested subset size to `[2, available]`.
///
/// When fewer than two points are available the lower bound wins, so the
/// result is never below [`MIN_SUBSET_SIZE`].
pub fn clamp_subset_size(requested: usize, available: usize) -> usize {
    requested.min(available).max(MIN_SUBSET_SIZE)
}

/// Settings for one extrapolation run.
///
/// A session replaces its configuration wholesale on every configure call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Label for the x-axis (e.g. "Time in Hours")
    pub x_label: String,
    /// Label for the y-axis (e.g. "Dissolved Oxygen (mg/L)")
    pub y_label: String,
    /// Polynomial form used for evaluation
    pub method: Method,
    /// Number of closest points fed to the polynomial
    pub subset_size: usize,
    /// x-value to predict at
    pub target_x: Option<f64>,
}

impl Configuration {
    pub fn new(
        x_label: impl Into<String>,
        y_label: impl Into<String>,
        method: Method,
        subset_size: usize,
        target_x: Option<f64>,
    ) -> Self {
        Self {
            x_label: x_label.into(),
            y_label: y_label.into(),
            method,
            subset_size,
            target_x,
        }
    }

    /// Copy of this configuration with `subset_size` clamped to `available` points
    pub fn clamped(mut self, available: usize) -> Self {
        self.subset_size = clamp_subset_size(self.subset_size, available);
        self
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            x_label: "Time".to_string(),
            y_label: "Value".to_string(),
            method: Method::Lagrange,
            subset_size: 5,
            target_x: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_within_range() {
        assert_eq!(clamp_subset_size(3, 5), 3);
    }

    #[test]
    fn test_clamp_below_minimum() {
        assert_eq!(clamp_subset_size(0, 5), 2);
        assert_eq!(clamp_subset_size(1, 5), 2);
    }

    #[test]
    fn test_clamp_above_available() {
        assert_eq!(clamp_subset_size(10, 4), 4);
    }

    #[test]
    fn test_clamp_with_too_few_points() {
        assert_eq!(clamp_subset_size(5, 1), 2);
        assert_eq!(clamp_subset_size(5, 0), 2);
    }

    #[test]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.x_label, "Time");
        assert_eq!(config.y_label, "Value");
        assert_eq!(config.method, Method::Lagrange);
        assert_eq!(config.subset_size, 5);
        assert!(config.target_x.is_none());
    }

    #[test]
    fn test_clamped_keeps_other_fields() {
        let config = Configuration::new("Hours", "DO", Method::DividedDifference, 9, Some(4.0))
            .clamped(3);
        assert_eq!(config.subset_size, 3);
        assert_eq!(config.method, Method::DividedDifference);
        assert_eq!(config.target_x, Some(4.0));
    }

    #[test]
    fn test_deserialize_partial_json_uses_defaults() {
        let config: Configuration =
            serde_json::from_str(r#"{"method": "divided-difference", "target_x": 6.0}"#).unwrap();
        assert_eq!(config.method, Method::DividedDifference);
        assert_eq!(config.target_x, Some(6.0));
        assert_eq!(config.subset_size, 5);
        assert_eq!(config.x_label, "Time");
    }
}
