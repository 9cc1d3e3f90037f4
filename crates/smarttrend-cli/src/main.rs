//! # smarttrend
//!
//! Command-line dissolved-oxygen forecasting with polynomial extrapolation.

mod loader;

use std::error::Error;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use extrapolation_facade::prelude::*;
use extrapolation_facade::config;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use loader::{load_points, parse_point, Columns};

type CliResult<T> = std::result::Result<T, Box<dyn Error>>;

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "smarttrend=info,extrapolation_core=info";

#[derive(Parser)]
#[command(name = "smarttrend")]
#[command(about = "Dissolved-oxygen forecasting by polynomial extrapolation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the value at a target x and grade its risk
    Predict {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// X value to predict at
        #[arg(short, long, conflicts_with = "horizon")]
        target: Option<f64>,

        /// Predict this far past the latest reading instead of at a fixed target
        #[arg(long)]
        horizon: Option<f64>,

        /// Write a plain-text report (or JSON for a .json path)
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Print the prediction as JSON instead of the derivation
        #[arg(long)]
        json: bool,
    },

    /// Sample the interpolating curve through every reading as CSV
    Curve {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Extend the curve to this x value
        #[arg(short, long)]
        target: Option<f64>,

        /// Number of samples
        #[arg(short = 'n', long, default_value = "50")]
        samples: usize,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Grade a dissolved-oxygen value
    Classify {
        /// Dissolved oxygen in mg/L
        #[arg(allow_negative_numbers = true)]
        value: f64,

        /// Print the assessment as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where readings come from
#[derive(Args)]
struct InputArgs {
    /// Input file (CSV or JSON)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Reading as x,y (repeatable, appended after file readings)
    #[arg(short, long = "point", value_parser = parse_point, allow_hyphen_values = true)]
    point: Vec<DataPoint>,

    /// CSV column holding x values
    #[arg(long)]
    x_column: Option<String>,

    /// CSV column holding y values
    #[arg(long)]
    y_column: Option<String>,
}

/// Configuration overrides, applied on top of `--config`
#[derive(Args)]
struct SettingsArgs {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interpolation method (lagrange, divided-difference, newton)
    #[arg(short, long)]
    method: Option<String>,

    /// Number of readings nearest the target to use
    #[arg(short, long)]
    subset: Option<usize>,

    /// Label for the x axis
    #[arg(long)]
    x_label: Option<String>,

    /// Label for the y axis
    #[arg(long)]
    y_label: Option<String>,
}

impl InputArgs {
    fn load(&self) -> CliResult<Vec<DataPoint>> {
        let mut points = match &self.input {
            Some(path) => {
                let columns = Columns {
                    x: self.x_column.clone(),
                    y: self.y_column.clone(),
                };
                let points = load_points(path, &columns)?;
                info!(count = points.len(), path = %path.display(), "loaded readings");
                points
            }
            None => Vec::new(),
        };
        points.extend(self.point.iter().copied());

        if points.is_empty() {
            return Err("no readings given; use --input or --point".into());
        }
        Ok(points)
    }
}

impl SettingsArgs {
    fn resolve(&self, target: Option<f64>) -> CliResult<Configuration> {
        let base = match &self.config {
            Some(path) => config::from_path(path)?,
            None => Configuration::default(),
        };

        let mut builder = ConfigurationBuilder::from_config(&base);
        if let Some(method) = &self.method {
            builder = builder.method_name(method.as_str());
        }
        if let Some(subset) = self.subset {
            builder = builder.subset_size(subset);
        }
        if let Some(label) = &self.x_label {
            builder = builder.x_label(label.as_str());
        }
        if let Some(label) = &self.y_label {
            builder = builder.y_label(label.as_str());
        }
        if let Some(target) = target {
            builder = builder.target_x(target);
        }

        Ok(builder.build()?)
    }
}

/// Run predict command
fn run_predict(
    input: InputArgs,
    settings: SettingsArgs,
    target: Option<f64>,
    horizon: Option<f64>,
    export: Option<PathBuf>,
    json: bool,
) -> CliResult<()> {
    let points = input.load()?;
    let config = settings.resolve(target)?;

    let mut session = ExtrapolationSession::new();
    session.collect(points);
    session.configure(config);
    if let Some(horizon) = horizon {
        session.set_prediction_horizon(horizon)?;
    }
    session.run()?;

    let record = match ExportRecord::latest(&session) {
        Some(record) => record,
        None => return Err("no prediction was recorded".into()),
    };

    if json {
        println!("{}", record.to_json()?);
    } else {
        println!("{}\n", record.narrative);
        print!("{}", PredictionReport::from_session(&session));
        if let Some(interpretation) = session.interpret_latest() {
            println!("\n{}", interpretation);
        }
    }

    if let Some(path) = export {
        write_export(&record, &path)?;
        info!(path = %path.display(), "exported prediction");
    }

    Ok(())
}

/// Write `record` as JSON for a `.json` path and as text otherwise
fn write_export(record: &ExportRecord, path: &Path) -> CliResult<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("json"));
    let contents = if is_json {
        record.to_json()?
    } else {
        record.to_text()
    };

    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Run curve command
fn run_curve(
    input: InputArgs,
    settings: SettingsArgs,
    target: Option<f64>,
    samples: usize,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let points = input.load()?;
    let config = settings.resolve(target)?;
    let curve = sample_curve(&points, &config, samples)?;

    match &output {
        Some(path) => write_curve(csv::Writer::from_path(path)?, &curve)?,
        None => write_curve(csv::Writer::from_writer(io::stdout().lock()), &curve)?,
    }

    if let Some(path) = output {
        info!(samples = curve.len(), path = %path.display(), "wrote curve");
    }
    Ok(())
}

fn write_curve<W: Write>(mut writer: csv::Writer<W>, curve: &[CurveSample]) -> CliResult<()> {
    for sample in curve {
        writer.serialize(sample)?;
    }
    writer.flush()?;
    Ok(())
}

/// Run classify command
fn run_classify(value: f64, json: bool) -> CliResult<()> {
    let assessment = classify(value);

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!("{:.4} mg/L: {} - {}", value, assessment.tier, assessment.message);
        println!("Recommended Action: {}", assessment.action);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Predict {
            input,
            settings,
            target,
            horizon,
            export,
            json,
        } => run_predict(input, settings, target, horizon, export, json),

        Commands::Curve {
            input,
            settings,
            target,
            samples,
            output,
        } => run_curve(input, settings, target, samples, output),

        Commands::Classify { value, json } => run_classify(value, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_default_log_filter_includes_session_events() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        let targets: Vec<&str> = DEFAULT_LOG_FILTER.split(',').collect();
        assert!(targets.contains(&"smarttrend=info"));
        assert!(targets.contains(&"extrapolation_core=info"));
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_predict_flags_override_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"method": "lagrange", "subset_size": 3, "x_label": "Hours"}"#)
            .unwrap();

        let cli = Cli::try_parse_from([
            "smarttrend",
            "predict",
            "--config",
            file.path().to_str().unwrap(),
            "--method",
            "newton",
            "--point",
            "0,6.5",
            "--point",
            "1,6.0",
            "--target",
            "2",
        ])
        .unwrap();

        let Commands::Predict {
            input,
            settings,
            target,
            ..
        } = cli.command
        else {
            panic!("expected predict");
        };

        let config = settings.resolve(target).unwrap();
        assert_eq!(config.method, Method::DividedDifference);
        assert_eq!(config.subset_size, 3);
        assert_eq!(config.x_label, "Hours");
        assert_eq!(config.target_x, Some(2.0));
        assert_eq!(input.load().unwrap().len(), 2);
    }

    #[test]
    fn test_target_conflicts_with_horizon() {
        let result = Cli::try_parse_from([
            "smarttrend", "predict", "--point", "0,1", "--target", "2", "--horizon", "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_point_values() {
        let cli = Cli::try_parse_from(["smarttrend", "predict", "--point", "-1,6.5"]).unwrap();
        let Commands::Predict { input, .. } = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(input.point, vec![DataPoint::new(-1.0, 6.5)]);
    }

    #[test]
    fn test_unknown_method_is_reported() {
        let settings = SettingsArgs {
            config: None,
            method: Some("spline".to_string()),
            subset: None,
            x_label: None,
            y_label: None,
        };
        let error = settings.resolve(None).unwrap_err();
        assert!(error.to_string().contains("spline"));
    }

    #[test]
    fn test_missing_readings() {
        let input = InputArgs {
            input: None,
            point: Vec::new(),
            x_column: None,
            y_column: None,
        };
        assert!(input.load().is_err());
    }

    #[test]
    fn test_write_export_by_extension() {
        let mut session = ExtrapolationSession::new();
        session.collect(vec![DataPoint::new(0.0, 6.5), DataPoint::new(1.0, 6.0)]);
        session.configure(Configuration::new("Hours", "DO", Method::Lagrange, 2, Some(2.0)));
        session.run().unwrap();
        let record = ExportRecord::latest(&session).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let text_path = dir.path().join("report.txt");
        let json_path = dir.path().join("report.json");
        write_export(&record, &text_path).unwrap();
        write_export(&record, &json_path).unwrap();

        let text = std::fs::read_to_string(&text_path).unwrap();
        assert!(text.starts_with("SmartTrend Extrapolation Result"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
        assert_eq!(json["method"], "lagrange");
    }
}
