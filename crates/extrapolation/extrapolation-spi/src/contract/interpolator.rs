//! Polynomial interpolator trait

use crate::error::Result;
use crate::model::{EvaluationTrace, Method};

/// Evaluates the unique polynomial through a set of samples.
///
/// Implementations require `xs.len() == ys.len() >= 2` and pairwise-distinct
/// x-values, failing with [`DegenerateInput`] and [`DuplicateAbscissa`]
/// respectively. They never correct bad input silently.
///
/// [`DegenerateInput`]: crate::ExtrapolationError::DegenerateInput
/// [`DuplicateAbscissa`]: crate::ExtrapolationError::DuplicateAbscissa
pub trait Interpolator: Send + Sync {
    /// Polynomial form this interpolator uses
    fn method(&self) -> Method;

    /// Evaluate the interpolating polynomial at `target`
    fn evaluate(&self, xs: &[f64], ys: &[f64], target: f64) -> Result<f64>;

    /// Evaluate at `target`, recording every intermediate step
    fn evaluate_traced(&self, xs: &[f64], ys: &[f64], target: f64) -> Result<EvaluationTrace>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtrapolationError;
    use crate::model::{LagrangeTerm, LagrangeTrace};

    /// Mock implementation: straight line through the first two samples
    struct SecantInterpolator;

    impl Interpolator for SecantInterpolator {
        fn method(&self) -> Method {
            Method::Lagrange
        }

        fn evaluate(&self, xs: &[f64], ys: &[f64], target: f64) -> Result<f64> {
            self.evaluate_traced(xs, ys, target).map(|trace| trace.value())
        }

        fn evaluate_traced(&self, xs: &[f64], ys: &[f64], target: f64) -> Result<EvaluationTrace> {
            if xs.len() < 2 || xs.len() != ys.len() {
                return Err(ExtrapolationError::DegenerateInput {
                    x_len: xs.len(),
                    y_len: ys.len(),
                });
            }
            let l0 = (target - xs[1]) / (xs[0] - xs[1]);
            let l1 = (target - xs[0]) / (xs[1] - xs[0]);
            let terms = vec![
                LagrangeTerm {
                    basis: l0,
                    weighted: ys[0] * l0,
                },
                LagrangeTerm {
                    basis: l1,
                    weighted: ys[1] * l1,
                },
            ];
            let value = terms.iter().map(|t| t.weighted).sum();
            Ok(EvaluationTrace::Lagrange(LagrangeTrace { terms, value }))
        }
    }

    #[test]
    fn test_mock_interpolator_line() {
        let interpolator = SecantInterpolator;
        let value = interpolator.evaluate(&[0.0, 1.0], &[1.0, 3.0], 2.0).unwrap();
        assert!((value - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_mock_interpolator_trace_matches_value() {
        let interpolator = SecantInterpolator;
        let trace = interpolator
            .evaluate_traced(&[0.0, 1.0], &[1.0, 3.0], 0.5)
            .unwrap();
        assert_eq!(trace.method(), Method::Lagrange);
        assert_eq!(
            trace.value(),
            interpolator.evaluate(&[0.0, 1.0], &[1.0, 3.0], 0.5).unwrap()
        );
    }

    #[test]
    fn test_interpolator_as_trait_object() {
        let interpolator: Box<dyn Interpolator> = Box::new(SecantInterpolator);
        assert!(interpolator.evaluate(&[0.0], &[1.0], 1.0).is_err());
    }

    #[test]
    fn test_interpolator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SecantInterpolator>();
    }
}
