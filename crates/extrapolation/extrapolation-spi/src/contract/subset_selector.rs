//! Subset selection trait

use crate::error::Result;
use crate::model::DataPoint;

/// Chooses which collected points feed the interpolating polynomial.
pub trait SubsetSelector: Send + Sync {
    /// Select `n` points for predicting at `target_x`.
    ///
    /// Fails with [`InsufficientData`](crate::ExtrapolationError::InsufficientData)
    /// when fewer than two points are supplied.
    fn select(&self, points: &[DataPoint], target_x: f64, n: usize) -> Result<Vec<DataPoint>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtrapolationError;

    /// Mock implementation: most recent points by x
    struct LatestSelector;

    impl SubsetSelector for LatestSelector {
        fn select(&self, points: &[DataPoint], _target_x: f64, n: usize) -> Result<Vec<DataPoint>> {
            if points.len() < 2 {
                return Err(ExtrapolationError::InsufficientData {
                    required: 2,
                    actual: points.len(),
                });
            }
            let mut sorted = points.to_vec();
            sorted.sort_by(|a, b| b.x.total_cmp(&a.x));
            sorted.truncate(n);
            Ok(sorted)
        }
    }

    #[test]
    fn test_mock_selector_picks_latest() {
        let points = vec![
            DataPoint::new(0.0, 1.0),
            DataPoint::new(2.0, 3.0),
            DataPoint::new(1.0, 2.0),
        ];
        let subset = LatestSelector.select(&points, 10.0, 2).unwrap();
        assert_eq!(subset, vec![DataPoint::new(2.0, 3.0), DataPoint::new(1.0, 2.0)]);
    }

    #[test]
    fn test_mock_selector_rejects_single_point() {
        let result = LatestSelector.select(&[DataPoint::new(0.0, 1.0)], 1.0, 2);
        assert_eq!(
            result,
            Err(ExtrapolationError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_selector_as_trait_object() {
        let selector: Box<dyn SubsetSelector> = Box::new(LatestSelector);
        assert!(selector.select(&[], 0.0, 2).is_err());
    }
}
