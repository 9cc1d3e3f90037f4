//! Intermediate arithmetic recorded while evaluating a polynomial
//!
//! Evaluators fill these in as they compute, so a derivation rendered from a
//! trace always reports the same numbers the evaluator returned.

use serde::{Deserialize, Serialize};

use crate::model::Method;

/// One Lagrange basis term `y_j * L_j(target)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagrangeTerm {
    /// `L_j(target)`
    pub basis: f64,
    /// `y_j * L_j(target)`
    pub weighted: f64,
}

/// Full record of a Lagrange evaluation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LagrangeTrace {
    /// One term per sample, in sample order
    pub terms: Vec<LagrangeTerm>,
    pub value: f64,
}

/// One in-place divided-difference update
/// `coef[index] = (upper - lower) / (x_upper - x_lower)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividedDifferenceStep {
    pub order: usize,
    pub index: usize,
    /// `coef[index]` before the update
    pub upper: f64,
    /// `coef[index - 1]`
    pub lower: f64,
    /// `x[index]`
    pub x_upper: f64,
    /// `x[index - order]`
    pub x_lower: f64,
    /// `coef[index]` after the update
    pub value: f64,
}

/// One Horner step `value = accumulator * (target - node_x) + coefficient`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HornerStep {
    pub node: usize,
    pub node_x: f64,
    pub accumulator: f64,
    pub coefficient: f64,
    pub value: f64,
}

/// Full record of a Newton divided-difference evaluation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DividedDifferenceTrace {
    /// Table updates in the order they were applied
    pub differences: Vec<DividedDifferenceStep>,
    /// Newton coefficients `c_0 .. c_{n-1}`
    pub coefficients: Vec<f64>,
    /// Horner steps from the highest-order coefficient down
    pub horner: Vec<HornerStep>,
    pub value: f64,
}

/// Trace of either evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvaluationTrace {
    Lagrange(LagrangeTrace),
    DividedDifference(DividedDifferenceTrace),
}

impl EvaluationTrace {
    pub fn method(&self) -> Method {
        match self {
            EvaluationTrace::Lagrange(_) => Method::Lagrange,
            EvaluationTrace::DividedDifference(_) => Method::DividedDifference,
        }
    }

    /// Value the evaluator returned
    pub fn value(&self) -> f64 {
        match self {
            EvaluationTrace::Lagrange(trace) => trace.value,
            EvaluationTrace::DividedDifference(trace) => trace.value,
        }
    }
}
