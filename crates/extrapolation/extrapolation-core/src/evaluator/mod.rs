//! Polynomial evaluators
//!
//! Both forms build the same interpolating polynomial and agree up to
//! floating-point rounding.

pub mod divided_difference;
pub mod lagrange;

pub use divided_difference::DividedDifference;
pub use lagrange::Lagrange;

use extrapolation_spi::{ExtrapolationError, Interpolator, Method, Result};

static LAGRANGE: Lagrange = Lagrange;
static DIVIDED_DIFFERENCE: DividedDifference = DividedDifference;

/// Interpolator implementing `method`
pub fn interpolator_for(method: Method) -> &'static dyn Interpolator {
    match method {
        Method::Lagrange => &LAGRANGE,
        Method::DividedDifference => &DIVIDED_DIFFERENCE,
    }
}

/// Require at least two samples with matching x and y counts
pub(crate) fn check_samples(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return Err(ExtrapolationError::DegenerateInput {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    Ok(())
}
