//! Basic example demonstrating a dissolved-oxygen forecast
//!
//! Run with: cargo run --example basic -p extrapolation-facade

use extrapolation_facade::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== SmartTrend Extrapolation Basic Examples ===\n");

    // Hourly dissolved-oxygen readings from a pond sensor
    let readings = vec![
        DataPoint::new(0.0, 7.4),
        DataPoint::new(1.0, 7.0),
        DataPoint::new(2.0, 6.5),
        DataPoint::new(3.0, 6.1),
        DataPoint::new(4.0, 5.6),
        DataPoint::new(5.0, 5.0),
    ];

    println!("Readings: {:?}\n", readings.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>());

    let mut session = ExtrapolationSession::new();
    session.collect(readings.clone());

    // 1. Lagrange forecast two hours ahead
    println!("1. Lagrange (subset of 4)");
    session.configure(
        ConfigurationBuilder::new()
            .x_label("Hours")
            .y_label("DO (mg/L)")
            .method(Method::Lagrange)
            .subset_size(4)
            .build()?,
    );
    let target = session.set_prediction_horizon(2.0)?;
    let prediction = session.run()?;
    println!("   P({:.1}) = {:.4} -> {}", target, prediction.y, prediction.risk.tier);
    println!("   Action: {}\n", prediction.risk.action);

    // 2. Same forecast with divided differences
    println!("2. Divided Difference (subset of 4)");
    let config = ConfigurationBuilder::from_config(session.config())
        .method_name("newton")
        .build()?;
    session.configure(config);
    session.set_prediction_horizon(2.0)?;
    let prediction = session.run()?;
    println!("   P({:.1}) = {:.4} -> {}\n", target, prediction.y, prediction.risk.tier);

    // 3. Trend interpretation
    println!("3. Interpretation");
    if let Some(interpretation) = session.interpret_latest() {
        println!("   {}\n", interpretation);
    }

    // 4. Derivation for the latest prediction
    println!("4. Derivation");
    if let Some(prediction) = session.latest_prediction() {
        println!("{}\n", prediction.narrative);
    }

    // 5. Sampled curve
    println!("5. Curve (6 samples)");
    for sample in sample_curve(&readings, session.config(), 6)? {
        println!("   x = {:.2}, y = {:.4}", sample.x, sample.y);
    }

    println!("\n{}", PredictionReport::from_session(&session));
    println!("=== Examples Complete ===");
    Ok(())
}
