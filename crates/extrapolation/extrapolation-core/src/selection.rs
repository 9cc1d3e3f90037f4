//! Subset selection
//!
//! Picks the points closest in x to the prediction target.

use extrapolation_spi::{clamp_subset_size, DataPoint, ExtrapolationError, Result, SubsetSelector};

/// Selects the `n` points nearest to the target by absolute x-distance.
///
/// Equidistant points keep their relative order from the input collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestSelector;

impl SubsetSelector for NearestSelector {
    fn select(&self, points: &[DataPoint], target_x: f64, n: usize) -> Result<Vec<DataPoint>> {
        select_nearest(points, target_x, n)
    }
}

/// Select the `n` points nearest to `target_x`.
///
/// `n` is clamped to `[2, points.len()]`, so the result length always equals
/// the clamped size. Fails with `InsufficientData` for fewer than two points.
pub fn select_nearest(points: &[DataPoint], target_x: f64, n: usize) -> Result<Vec<DataPoint>> {
    if points.len() < 2 {
        return Err(ExtrapolationError::InsufficientData {
            required: 2,
            actual: points.len(),
        });
    }

    let mut ranked = points.to_vec();
    // sort_by is stable
    ranked.sort_by(|a, b| a.distance_to(target_x).total_cmp(&b.distance_to(target_x)));
    ranked.truncate(clamp_subset_size(n, points.len()));

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(raw: &[(f64, f64)]) -> Vec<DataPoint> {
        raw.iter().copied().map(DataPoint::from).collect()
    }

    #[test]
    fn test_selects_closest_points_in_distance_order() {
        let data = points(&[(0.0, 6.5), (1.0, 6.0), (2.0, 5.2), (3.0, 4.8), (4.0, 4.1)]);
        let subset = select_nearest(&data, 3.2, 3).unwrap();
        let xs: Vec<f64> = subset.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![3.0, 4.0, 2.0]);
    }

    #[test]
    fn test_exact_match_comes_first() {
        let data = points(&[(0.0, 1.0), (5.0, 2.0), (2.0, 3.0), (3.0, 4.0)]);
        let subset = select_nearest(&data, 2.0, 2).unwrap();
        assert_eq!(subset[0], DataPoint::new(2.0, 3.0));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let data = points(&[(3.0, 30.0), (1.0, 10.0), (2.0, 20.0)]);
        // 1.0 and 3.0 are both 1.0 away from 2.0
        let subset = select_nearest(&data, 2.0, 3).unwrap();
        let xs: Vec<f64> = subset.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 1.0]);
    }

    #[test]
    fn test_size_is_clamped() {
        let data = points(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        assert_eq!(select_nearest(&data, 0.0, 0).unwrap().len(), 2);
        assert_eq!(select_nearest(&data, 0.0, 10).unwrap().len(), 3);
    }

    #[test]
    fn test_insufficient_data() {
        let data = points(&[(0.0, 1.0)]);
        assert_eq!(
            select_nearest(&data, 0.0, 2),
            Err(ExtrapolationError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
        assert!(NearestSelector.select(&[], 0.0, 2).is_err());
    }

    #[test]
    fn test_input_is_not_reordered() {
        let data = points(&[(4.0, 1.0), (0.0, 2.0), (2.0, 3.0)]);
        let before = data.clone();
        let _ = NearestSelector.select(&data, 0.0, 2).unwrap();
        assert_eq!(data, before);
    }
}
