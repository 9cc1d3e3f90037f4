//! Observed time-series sample

use serde::{Deserialize, Serialize};

/// A single observed `(x, y)` sample.
///
/// Points are immutable once created; the collection that holds them is
/// owned by the session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Abscissa (typically time)
    pub x: f64,
    /// Observed value
    pub y: f64,
}

impl DataPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Absolute x-distance from `target`
    pub fn distance_to(&self, target: f64) -> f64 {
        (self.x - target).abs()
    }
}

impl From<(f64, f64)> for DataPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
