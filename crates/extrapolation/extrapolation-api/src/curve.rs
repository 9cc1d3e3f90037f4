//! Trend curve sampling
//!
//! Draws the interpolating curve by running an independent session for
//! every sample, using all collected points as the subset. The core has no
//! vectorized evaluation path; each sample is one full prediction.

use extrapolation_core::ExtrapolationSession;
use extrapolation_spi::{Configuration, DataPoint, ExtrapolationError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One point on a sampled curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub x: f64,
    pub y: f64,
}

/// Sample the curve over `[min_x, max(max_x, target_x)]`.
///
/// `config` supplies labels, method, and target; the subset size is forced
/// to every point. Without a target the range ends at the largest x.
pub fn sample_curve(
    points: &[DataPoint],
    config: &Configuration,
    samples: usize,
) -> Result<Vec<CurveSample>> {
    if points.len() < 2 {
        return Err(ExtrapolationError::InsufficientData {
            required: 2,
            actual: points.len(),
        });
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let end = config.target_x.map_or(max_x, |target| target.max(max_x));

    let curve = linspace(min_x, end, samples)
        .map(|x| -> Result<CurveSample> {
            let mut session = ExtrapolationSession::new();
            session.collect(points.iter().copied());
            session.configure(Configuration {
                subset_size: points.len(),
                target_x: Some(x),
                ..config.clone()
            });
            let y = session.run()?.y;
            Ok(CurveSample { x, y })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(samples = curve.len(), start = min_x, end, "sampled curve");
    Ok(curve)
}

/// `count` evenly spaced values from `start` to `end` inclusive
fn linspace(start: f64, end: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count > 1 {
        (end - start) / (count - 1) as f64
    } else {
        0.0
    };
    (0..count).map(move |i| {
        if count > 1 && i == count - 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}
