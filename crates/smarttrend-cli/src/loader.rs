//! Data point loading
//!
//! Reads `(x, y)` readings from CSV or JSON files and from `x,y` flag
//! values. Every value is checked for numeric parseability here; the
//! extrapolation core never sees raw text.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use extrapolation_facade::DataPoint;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading input readings
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Column '{0}' not found")]
    MissingColumn(String),

    #[error("x and y cannot both come from column '{0}'")]
    SharedColumn(String),

    #[error("Line {line}: expected at least two columns")]
    ShortRecord { line: usize },

    #[error("Line {line}: '{value}' is not a number")]
    NotANumber { line: usize, value: String },

    #[error("Invalid point '{0}': expected x,y")]
    InvalidPoint(String),

    #[error("No data points found in {}", .0.display())]
    Empty(PathBuf),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;

/// Column selection for CSV input
#[derive(Debug, Clone, Default)]
pub struct Columns {
    pub x: Option<String>,
    pub y: Option<String>,
}

/// Load readings from `path`, choosing the format by extension.
///
/// Files without a `.csv` or `.json` extension are tried as CSV first.
pub fn load_points(path: &Path, columns: &Columns) -> LoadResult<Vec<DataPoint>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let points = match ext.as_str() {
        "csv" => load_csv(path, columns)?,
        "json" => load_json(path)?,
        _ => load_csv(path, columns).or_else(|_| load_json(path))?,
    };

    if points.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    Ok(points)
}

fn open(path: &Path) -> LoadResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// CSV with a header row.
///
/// Without explicit column names, headers named `x` and `y` are used when
/// present. A coordinate with no matching header takes the first column not
/// already claimed by the other.
fn load_csv(path: &Path, columns: &Columns) -> LoadResult<Vec<DataPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(open(path)?);
    let headers = reader.headers()?.clone();

    let find = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| LoadError::MissingColumn(name.to_string()))
    };
    let named_x = match &columns.x {
        Some(name) => Some(find(name)?),
        None => find("x").ok(),
    };
    let named_y = match &columns.y {
        Some(name) => Some(find(name)?),
        None => find("y").ok(),
    };

    let first_free = |taken: Option<usize>| {
        (0..headers.len())
            .find(|i| Some(*i) != taken)
            .ok_or(LoadError::ShortRecord { line: 1 })
    };
    let x_idx = match named_x {
        Some(idx) => idx,
        None => first_free(named_y)?,
    };
    let y_idx = match named_y {
        Some(idx) => idx,
        None => first_free(Some(x_idx))?,
    };
    if x_idx == y_idx {
        let name = headers.get(x_idx).unwrap_or_default().to_string();
        return Err(LoadError::SharedColumn(name));
    }

    let mut points = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1
        let line = row + 2;
        let (Some(x), Some(y)) = (record.get(x_idx), record.get(y_idx)) else {
            return Err(LoadError::ShortRecord { line });
        };
        points.push(DataPoint::new(parse_number(x, line)?, parse_number(y, line)?));
    }

    Ok(points)
}

fn parse_number(value: &str, line: usize) -> LoadResult<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| LoadError::NotANumber {
            line,
            value: value.to_string(),
        })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoint {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoints {
    List(Vec<JsonPoint>),
    Wrapped { points: Vec<JsonPoint> },
}

/// JSON array of `{"x": .., "y": ..}` objects or `[x, y]` pairs, optionally
/// wrapped in `{"points": [...]}`
fn load_json(path: &Path) -> LoadResult<Vec<DataPoint>> {
    let parsed: JsonPoints = serde_json::from_reader(open(path)?)?;
    let list = match parsed {
        JsonPoints::List(list) | JsonPoints::Wrapped { points: list } => list,
    };

    Ok(list
        .into_iter()
        .map(|point| match point {
            JsonPoint::Object { x, y } => DataPoint::new(x, y),
            JsonPoint::Pair([x, y]) => DataPoint::new(x, y),
        })
        .collect())
}

/// Parse an `x,y` flag value
pub fn parse_point(value: &str) -> LoadResult<DataPoint> {
    let invalid = || LoadError::InvalidPoint(value.to_string());

    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x: f64 = x.trim().parse().map_err(|_| invalid())?;
    let y: f64 = y.trim().parse().map_err(|_| invalid())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(invalid());
    }

    Ok(DataPoint::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    // ========================================================================
    // CSV
    // ========================================================================

    #[test]
    fn test_load_csv_with_xy_headers() {
        let file = write_temp(".csv", "time,y,x\n0,6.5,10\n1,6.0,11\n");
        let points = load_points(file.path(), &Columns::default()).unwrap();
        assert_eq!(
            points,
            vec![DataPoint::new(10.0, 6.5), DataPoint::new(11.0, 6.0)]
        );
    }

    #[test]
    fn test_load_csv_defaults_to_first_two_columns() {
        let file = write_temp(".csv", "hours,do_mg_l\n0, 6.5\n1, 6.0\n2, 5.2\n");
        let points = load_points(file.path(), &Columns::default()).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[2], DataPoint::new(2.0, 5.2));
    }

    #[test]
    fn test_load_csv_x_header_in_second_column() {
        let file = write_temp(".csv", "time,x\n0,6.5\n1,6.0\n");
        let points = load_points(file.path(), &Columns::default()).unwrap();
        assert_eq!(
            points,
            vec![DataPoint::new(6.5, 0.0), DataPoint::new(6.0, 1.0)]
        );
    }

    #[test]
    fn test_load_csv_y_header_in_first_column() {
        let file = write_temp(".csv", "y,time\n6.5,0\n6.0,1\n");
        let points = load_points(file.path(), &Columns::default()).unwrap();
        assert_eq!(points[0], DataPoint::new(0.0, 6.5));
    }

    #[test]
    fn test_load_csv_rejects_shared_column() {
        let file = write_temp(".csv", "hours,do\n0,7.1\n");
        let columns = Columns {
            x: Some("do".to_string()),
            y: Some("DO".to_string()),
        };
        assert!(matches!(
            load_points(file.path(), &columns),
            Err(LoadError::SharedColumn(name)) if name == "do"
        ));
    }

    #[test]
    fn test_load_csv_single_column() {
        let file = write_temp(".csv", "x\n0\n1\n");
        assert!(matches!(
            load_points(file.path(), &Columns::default()),
            Err(LoadError::ShortRecord { line: 1 })
        ));
    }

    #[test]
    fn test_load_csv_named_columns() {
        let file = write_temp(".csv", "site,hours,do\nA,0,7.1\nA,1,6.8\n");
        let columns = Columns {
            x: Some("hours".to_string()),
            y: Some("DO".to_string()),
        };
        let points = load_points(file.path(), &columns).unwrap();
        assert_eq!(points[1], DataPoint::new(1.0, 6.8));
    }

    #[test]
    fn test_load_csv_missing_column() {
        let file = write_temp(".csv", "hours,do\n0,7.1\n");
        let columns = Columns {
            x: Some("minutes".to_string()),
            y: None,
        };
        assert!(matches!(
            load_points(file.path(), &columns),
            Err(LoadError::MissingColumn(name)) if name == "minutes"
        ));
    }

    #[test]
    fn test_load_csv_rejects_non_numeric() {
        let file = write_temp(".csv", "x,y\n0,6.5\n1,n/a\n");
        match load_points(file.path(), &Columns::default()) {
            Err(LoadError::NotANumber { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "n/a");
            }
            other => panic!("Expected NotANumber, got {:?}", other),
        }
    }

    #[test]
    fn test_load_csv_header_only_is_empty() {
        let file = write_temp(".csv", "x,y\n");
        assert!(matches!(
            load_points(file.path(), &Columns::default()),
            Err(LoadError::Empty(_))
        ));
    }

    // ========================================================================
    // JSON
    // ========================================================================

    #[test]
    fn test_load_json_objects_and_pairs() {
        let objects = write_temp(".json", r#"[{"x": 0, "y": 6.5}, {"x": 1, "y": 6.0}]"#);
        let pairs = write_temp(".json", "[[0, 6.5], [1, 6.0]]");

        let expected = vec![DataPoint::new(0.0, 6.5), DataPoint::new(1.0, 6.0)];
        assert_eq!(load_points(objects.path(), &Columns::default()).unwrap(), expected);
        assert_eq!(load_points(pairs.path(), &Columns::default()).unwrap(), expected);
    }

    #[test]
    fn test_load_json_wrapped() {
        let file = write_temp(".json", r#"{"points": [[2, 5.2], [3, 4.8]]}"#);
        let points = load_points(file.path(), &Columns::default()).unwrap();
        assert_eq!(points[1], DataPoint::new(3.0, 4.8));
    }

    #[test]
    fn test_load_json_rejects_strings() {
        let file = write_temp(".json", r#"[{"x": "zero", "y": 6.5}]"#);
        assert!(matches!(
            load_points(file.path(), &Columns::default()),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_points(Path::new("/nonexistent/readings.csv"), &Columns::default());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    // ========================================================================
    // Flag values
    // ========================================================================

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("3,4.8").unwrap(), DataPoint::new(3.0, 4.8));
        assert_eq!(parse_point(" -1.5 , 2 ").unwrap(), DataPoint::new(-1.5, 2.0));
    }

    #[test]
    fn test_parse_point_rejects_malformed() {
        for value in ["3", "3;4", "a,1", "1,", "inf,1", "1,NaN"] {
            assert!(
                matches!(parse_point(value), Err(LoadError::InvalidPoint(_))),
                "accepted {:?}",
                value
            );
        }
    }
}
