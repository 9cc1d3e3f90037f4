//! Newton divided-difference form
//!
//! Coefficients are built in a single buffer initialised to `ys`. For each
//! order `i` the entries `j = n-1 .. i` are updated in descending order, so
//! `coef[j - 1]` still holds the order `i - 1` value when `coef[j]` reads it.
//! The polynomial is then evaluated with Horner's scheme from `coef[n-1]`
//! down to `coef[0]`.

use extrapolation_spi::{
    DividedDifferenceStep, DividedDifferenceTrace, EvaluationTrace, ExtrapolationError,
    HornerStep, Interpolator, Method, Result,
};

use super::check_samples;

/// Newton divided-difference interpolator
#[derive(Debug, Clone, Copy, Default)]
pub struct DividedDifference;

impl Interpolator for DividedDifference {
    fn method(&self) -> Method {
        Method::DividedDifference
    }

    fn evaluate(&self, xs: &[f64], ys: &[f64], target: f64) -> Result<f64> {
        evaluate(xs, ys, target)
    }

    fn evaluate_traced(&self, xs: &[f64], ys: &[f64], target: f64) -> Result<EvaluationTrace> {
        evaluate_traced(xs, ys, target).map(EvaluationTrace::DividedDifference)
    }
}

/// Newton coefficients `c_0 .. c_{n-1}` for the samples `(xs, ys)`
pub fn coefficients(xs: &[f64], ys: &[f64]) -> Result<Vec<f64>> {
    check_samples(xs, ys)?;
    build_coefficients(xs, ys, None)
}

/// Evaluate the Newton polynomial through `(xs, ys)` at `target`
pub fn evaluate(xs: &[f64], ys: &[f64], target: f64) -> Result<f64> {
    check_samples(xs, ys)?;
    let coef = build_coefficients(xs, ys, None)?;
    Ok(horner(xs, &coef, target, None))
}

/// Evaluate at `target`, keeping every table update and Horner step
pub fn evaluate_traced(xs: &[f64], ys: &[f64], target: f64) -> Result<DividedDifferenceTrace> {
    check_samples(xs, ys)?;

    let mut trace = DividedDifferenceTrace::default();
    let coef = build_coefficients(xs, ys, Some(&mut trace.differences))?;
    trace.value = horner(xs, &coef, target, Some(&mut trace.horner));
    trace.coefficients = coef;

    Ok(trace)
}

fn build_coefficients(
    xs: &[f64],
    ys: &[f64],
    mut steps: Option<&mut Vec<DividedDifferenceStep>>,
) -> Result<Vec<f64>> {
    let n = xs.len();
    let mut coef = ys.to_vec();

    for order in 1..n {
        for j in (order..n).rev() {
            let denominator = xs[j] - xs[j - order];
            if denominator == 0.0 {
                return Err(ExtrapolationError::DuplicateAbscissa {
                    first: j - order,
                    second: j,
                    x: xs[j],
                });
            }

            let upper = coef[j];
            let lower = coef[j - 1];
            coef[j] = (upper - lower) / denominator;

            if let Some(steps) = steps.as_deref_mut() {
                steps.push(DividedDifferenceStep {
                    order,
                    index: j,
                    upper,
                    lower,
                    x_upper: xs[j],
                    x_lower: xs[j - order],
                    value: coef[j],
                });
            }
        }
    }

    Ok(coef)
}

fn horner(xs: &[f64], coef: &[f64], target: f64, mut steps: Option<&mut Vec<HornerStep>>) -> f64 {
    let n = coef.len();
    let mut acc = coef[n - 1];

    for i in (0..n - 1).rev() {
        let value = acc * (target - xs[i]) + coef[i];
        if let Some(steps) = steps.as_deref_mut() {
            steps.push(HornerStep {
                node: i,
                node_x: xs[i],
                accumulator: acc,
                coefficient: coef[i],
                value,
            });
        }
        acc = value;
    }

    acc
}
