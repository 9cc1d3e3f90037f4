//! Lagrange form
//!
//! `P(t) = Σ_j y_j · L_j(t)` with `L_j(t) = Π_{i≠j} (t - x_i) / (x_j - x_i)`.
//! O(n²) time. At `t == x_k` the basis values are exactly 1 for `k` and 0
//! elsewhere, so the sample value comes back unchanged.

use extrapolation_spi::{
    EvaluationTrace, ExtrapolationError, Interpolator, LagrangeTerm, LagrangeTrace, Method, Result,
};

use super::check_samples;

/// Lagrange basis-polynomial interpolator
#[derive(Debug, Clone, Copy, Default)]
pub struct Lagrange;

impl Interpolator for Lagrange {
    fn method(&self) -> Method {
        Method::Lagrange
    }

    fn evaluate(&self, xs: &[f64], ys: &[f64], target: f64) -> Result<f64> {
        evaluate(xs, ys, target)
    }

    fn evaluate_traced(&self, xs: &[f64], ys: &[f64], target: f64) -> Result<EvaluationTrace> {
        evaluate_traced(xs, ys, target).map(EvaluationTrace::Lagrange)
    }
}

/// Evaluate the Lagrange polynomial through `(xs, ys)` at `target`
pub fn evaluate(xs: &[f64], ys: &[f64], target: f64) -> Result<f64> {
    accumulate(xs, ys, target, None)
}

/// Evaluate at `target`, keeping every basis term
pub fn evaluate_traced(xs: &[f64], ys: &[f64], target: f64) -> Result<LagrangeTrace> {
    let mut terms = Vec::with_capacity(xs.len());
    let value = accumulate(xs, ys, target, Some(&mut terms))?;
    Ok(LagrangeTrace { terms, value })
}

fn accumulate(
    xs: &[f64],
    ys: &[f64],
    target: f64,
    mut terms: Option<&mut Vec<LagrangeTerm>>,
) -> Result<f64> {
    check_samples(xs, ys)?;

    let n = xs.len();
    let mut sum = 0.0;

    for j in 0..n {
        let mut basis = 1.0;

        for i in 0..n {
            if i == j {
                continue;
            }
            let denominator = xs[j] - xs[i];
            if denominator == 0.0 {
                return Err(ExtrapolationError::DuplicateAbscissa {
                    first: i.min(j),
                    second: i.max(j),
                    x: xs[j],
                });
            }
            basis *= (target - xs[i]) / denominator;
        }

        let weighted = ys[j] * basis;
        if let Some(terms) = terms.as_deref_mut() {
            terms.push(LagrangeTerm { basis, weighted });
        }
        sum += weighted;
    }

    Ok(sum)
}
