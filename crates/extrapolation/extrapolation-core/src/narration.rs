//! Step-by-step derivation text
//!
//! Narratives are rendered from an [`EvaluationTrace`], so every number in
//! the text is the value the evaluator actually computed. Inputs and the
//! target are printed to 4 decimal places, computed values to 6.

use extrapolation_spi::{DividedDifferenceTrace, EvaluationTrace, LagrangeTrace, Method, Result};

use crate::evaluator::interpolator_for;

const RULE_WIDTH: usize = 50;

/// Evaluate with `method` and describe every arithmetic step
pub fn narrate(method: Method, xs: &[f64], ys: &[f64], target: f64) -> Result<String> {
    let trace = interpolator_for(method).evaluate_traced(xs, ys, target)?;
    Ok(render(xs, ys, target, &trace))
}

/// Render a derivation from an existing trace.
///
/// `xs`, `ys`, and `target` must be the inputs the trace was produced from.
pub fn render(xs: &[f64], ys: &[f64], target: f64, trace: &EvaluationTrace) -> String {
    match trace {
        EvaluationTrace::Lagrange(trace) => render_lagrange(xs, ys, target, trace),
        EvaluationTrace::DividedDifference(trace) => render_divided_difference(xs, ys, target, trace),
    }
}

/// Final line of every narrative
pub fn predicted_value_line(target: f64, value: f64) -> String {
    format!("PREDICTED VALUE: P({:.4}) = {:.6}", target, value)
}

fn heading(lines: &mut Vec<String>, title: &str, xs: &[f64], ys: &[f64], target: f64) {
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(title.to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(format!("\nGiven Data Points (n = {}):", xs.len()));
    for (i, (x, y)) in xs.iter().zip(ys.iter()).enumerate() {
        lines.push(format!("  P{i}: (x{i}, y{i}) = ({:.4}, {:.4})", x, y));
    }
    lines.push(format!("\nTarget X value to predict: x = {:.4}", target));
    lines.push(format!("\n{}", "-".repeat(RULE_WIDTH)));
}

fn render_lagrange(xs: &[f64], ys: &[f64], target: f64, trace: &LagrangeTrace) -> String {
    let mut lines = Vec::new();
    heading(
        &mut lines,
        "LAGRANGE INTERPOLATION - STEP BY STEP SOLUTION",
        xs,
        ys,
        target,
    );
    lines.push("Lagrange Formula:".to_string());
    lines.push("P(x) = SUM [y_j * L_j(x)]  for j = 0 to n-1".to_string());
    lines.push("where L_j(x) = PRODUCT [(x - x_i) / (x_j - x_i)]  for i != j".to_string());
    lines.push("-".repeat(RULE_WIDTH));

    for (j, term) in trace.terms.iter().enumerate() {
        lines.push(format!("\n--- Computing L_{j}(x) ---"));

        let others = || xs.iter().enumerate().filter(move |(i, _)| *i != j);
        let numerators: Vec<String> = others()
            .map(|(_, xi)| format!("({:.4} - {:.4})", target, xi))
            .collect();
        let denominators: Vec<String> = others()
            .map(|(_, xi)| format!("({:.4} - {:.4})", xs[j], xi))
            .collect();

        lines.push(format!("L_{j}(x) = [{}]", numerators.join(" * ")));
        lines.push(format!("         / [{}]", denominators.join(" * ")));
        lines.push(format!("L_{j}({:.4}) = {:.6}", target, term.basis));
        lines.push(format!(
            "y_{j} * L_{j}(x) = {:.4} * {:.6} = {:.6}",
            ys[j], term.basis, term.weighted
        ));
    }

    let weighted_terms: Vec<String> = ys
        .iter()
        .enumerate()
        .map(|(j, y)| format!("({:.4} * L_{j})", y))
        .collect();

    lines.push(format!("\n{}", "=".repeat(RULE_WIDTH)));
    lines.push("FINAL CALCULATION:".to_string());
    lines.push(format!("P({:.4}) = SUM [y_j * L_j(x)]", target));
    lines.push(format!("P({:.4}) = {}", target, weighted_terms.join(" + ")));
    lines.push(format!("\n{}", predicted_value_line(target, trace.value)));
    lines.push("=".repeat(RULE_WIDTH));

    lines.join("\n")
}

fn render_divided_difference(
    xs: &[f64],
    ys: &[f64],
    target: f64,
    trace: &DividedDifferenceTrace,
) -> String {
    let mut lines = Vec::new();
    heading(
        &mut lines,
        "NEWTON'S DIVIDED DIFFERENCE - STEP BY STEP SOLUTION",
        xs,
        ys,
        target,
    );
    lines.push("Divided Difference Formula:".to_string());
    lines.push("P(x) = f[x0] + f[x0,x1](x-x0) + f[x0,x1,x2](x-x0)(x-x1) + ...".to_string());
    lines.push("-".repeat(RULE_WIDTH));

    lines.push("\n--- Building Divided Difference Table ---".to_string());
    lines.push("\nOrder 0 (f[x_i] = y_i):".to_string());
    for (i, y) in ys.iter().enumerate() {
        lines.push(format!("  f[x{i}] = {:.6}", y));
    }

    let mut current_order = 0;
    for step in &trace.differences {
        if step.order != current_order {
            current_order = step.order;
            lines.push(format!("\nOrder {} Divided Differences:", current_order));
        }
        lines.push(format!(
            "  f[x{},...,x{}] = ({:.6} - {:.6}) / ({:.4} - {:.4})",
            step.index - step.order,
            step.index,
            step.upper,
            step.lower,
            step.x_upper,
            step.x_lower
        ));
        lines.push(format!("                    = {:.6}", step.value));
    }

    lines.push("\n--- Coefficients for Newton's Polynomial ---".to_string());
    for (j, c) in trace.coefficients.iter().enumerate() {
        lines.push(format!("  c{j} = {:.6}", c));
    }

    lines.push(format!(
        "\n--- Evaluating P({:.4}) using Horner's Method ---",
        target
    ));
    if let Some(last) = trace.coefficients.len().checked_sub(1) {
        lines.push(format!(
            "Starting with c{last} = {:.6}",
            trace.coefficients[last]
        ));
    }
    for step in &trace.horner {
        lines.push(format!(
            "P = {:.6} * ({:.4} - {:.4}) + {:.6} = {:.6}",
            step.accumulator, target, step.node_x, step.coefficient, step.value
        ));
    }

    lines.push(format!("\n{}", "=".repeat(RULE_WIDTH)));
    lines.push(predicted_value_line(target, trace.value));
    lines.push("=".repeat(RULE_WIDTH));

    lines.join("\n")
}
