//! # autocorr-cli
//!
//! Command-line interface for the autocorr time series statistics engine.

use analysis::{
    difference, ingest, parse_delimited, simulate_ma1, AnalysisConfig, AnalysisCoordinator,
    AnalysisError, AnalysisResult, Cell, Ma1Config, RawRow, Series, SeriesAnalyzer,
};
use clap::{Parser, Subcommand};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "autocorr")]
#[command(about = "Exploratory time series statistics (ACF, PACF, trend)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute ACF, PACF and trend for a series
    Analyze {
        /// Input file (CSV or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Column name or index for the values (default: label,value layout)
        #[arg(short, long)]
        column: Option<String>,

        /// Maximum lag to report
        #[arg(short = 'l', long, default_value_t = analysis::DEFAULT_MAX_LAG)]
        max_lag: usize,

        /// Two-sided significance level
        #[arg(short, long, default_value_t = analysis::DEFAULT_SIGNIFICANCE_LEVEL)]
        significance: f64,

        /// Analyse the first difference instead of the raw series
        #[arg(short, long)]
        difference: bool,

        /// Output file for the JSON result (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a synthetic MA(1) series as CSV
    Simulate {
        /// Number of samples
        #[arg(short = 'n', long, default_value_t = 100)]
        samples: usize,

        /// Moving-average coefficient
        #[arg(long, default_value_t = 0.5, allow_negative_numbers = true)]
        phi1: f64,

        /// Innovation variance
        #[arg(long, default_value_t = 1.0)]
        variance: f64,

        /// RNG seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Build a series from CSV text.
///
/// Without a column the `label,value` layout is assumed. With a column
/// (header name or 0-based index) the values come from that column and
/// observations are labelled by position.
fn series_from_csv(text: &str, column: Option<&str>) -> CliResult<Series> {
    let Some(column) = column else {
        return ingest(parse_delimited(text)).map_err(|e| e.to_string());
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();

    // Try to parse as index first, then find by name
    let col_idx = match column.parse::<usize>() {
        Ok(idx) => idx,
        Err(_) => headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| format!("Column '{}' not found", column))?,
    };

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        let cell = record.get(col_idx).map(Cell::from).unwrap_or(Cell::Empty);
        rows.push(RawRow::new((i + 1).to_string(), cell));
    }

    ingest(rows).map_err(|e| e.to_string())
}

/// Build a series from JSON text.
///
/// Accepts an array of numbers, an array of objects (keyed by `column` or
/// one of `value`/`values`/`y`), or an object holding a `values` array and
/// optional `labels`.
fn series_from_json(text: &str, column: Option<&str>) -> CliResult<Series> {
    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    if let Some(arr) = json.as_array() {
        if arr.iter().all(|v| v.is_number()) {
            let values = arr.iter().filter_map(|v| v.as_f64()).collect();
            return Series::from_values(values).map_err(|e| e.to_string());
        }

        let keys: Vec<&str> = match column {
            Some(col) => vec![col],
            None => vec!["value", "values", "y"],
        };
        for key in keys {
            let rows: Vec<RawRow> = arr
                .iter()
                .enumerate()
                .filter_map(|(i, obj)| {
                    let cell = obj.get(key)?;
                    let label = obj
                        .get("label")
                        .and_then(|l| l.as_str())
                        .map(String::from)
                        .unwrap_or_else(|| (i + 1).to_string());
                    Some(RawRow::new(label, json_cell(cell)))
                })
                .collect();
            if !rows.is_empty() {
                return ingest(rows).map_err(|e| e.to_string());
            }
        }
    }

    if let Some(obj) = json.as_object() {
        for key in ["values", "data", "series", "y"] {
            if let Some(arr) = obj.get(key).and_then(|v| v.as_array()) {
                let labels: Vec<String> = match obj.get("labels").and_then(|l| l.as_array()) {
                    Some(labels) => labels
                        .iter()
                        .map(|v| match v {
                            serde_json::Value::String(s) => s.clone(),
                            other => other.to_string(),
                        })
                        .collect(),
                    None => (1..=arr.len()).map(|i| i.to_string()).collect(),
                };
                if labels.len() != arr.len() {
                    return Err(AnalysisError::LengthMismatch {
                        values: arr.len(),
                        labels: labels.len(),
                    }
                    .to_string());
                }
                let rows: Vec<RawRow> = arr
                    .iter()
                    .zip(labels)
                    .map(|(v, label)| RawRow::new(label, json_cell(v)))
                    .collect();
                return ingest(rows).map_err(|e| e.to_string());
            }
        }
    }

    Err("Could not extract numeric data from JSON".to_string())
}

fn json_cell(value: &serde_json::Value) -> Cell {
    match value {
        serde_json::Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Empty),
        serde_json::Value::String(s) => Cell::from(s.as_str()),
        _ => Cell::Empty,
    }
}

/// Load data from file (auto-detect format)
fn load_series(path: &Path, column: Option<&str>) -> CliResult<Series> {
    let text = fs::read_to_string(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" | "txt" | "tsv" => series_from_csv(&text, column),
        "json" => series_from_json(&text, column),
        _ => series_from_csv(&text, column).or_else(|_| series_from_json(&text, column)),
    }
}

/// Print the correlogram table, flagging lags outside the white-noise band.
fn print_summary(result: &AnalysisResult) {
    println!("Observations: {}", result.observations);
    println!(
        "Trend: slope {:.6} per step ({})",
        result.trend_coefficient(),
        if result.has_trend() { "significant" } else { "not significant" }
    );
    if let (Some(t), Some(critical)) = (result.trend.t_statistic, result.trend.critical_value) {
        println!("  t = {:.3}, critical = {:.3}", t, critical);
    }
    println!("Confidence band: ±{:.4}", result.confidence_bound);
    println!("{:>5}  {:>9}  {:>9}", "lag", "acf", "pacf");
    for (acf, pacf) in result.autocorrelations.iter().zip(&result.pacf) {
        let mark = |v: f64| if v.abs() > result.confidence_bound { '*' } else { ' ' };
        println!(
            "{:>5}  {:>8.4}{}  {:>8.4}{}",
            acf.lag,
            acf.value,
            mark(acf.value),
            pacf.value,
            mark(pacf.value)
        );
    }
    println!(
        "Ljung-Box Q({}) = {:.3}, p = {:.4}",
        result.ljung_box.lags, result.ljung_box.statistic, result.ljung_box.p_value
    );
}

fn write_json<T: serde::Serialize>(value: &T, output: Option<&PathBuf>) -> CliResult<()> {
    if let Some(path) = output {
        let mut file = File::create(path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, value)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Result written to {:?}", path);
    } else {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
        println!("{}", json);
    }
    Ok(())
}

/// Run analyze command
fn run_analyze(
    input: PathBuf,
    column: Option<String>,
    max_lag: usize,
    significance: f64,
    differenced: bool,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let series = load_series(&input, column.as_deref())?;
    println!(
        "Loaded {} data points from {:?}",
        series.len(),
        input.file_name().unwrap_or_default()
    );

    let series = if differenced {
        difference(&series).map_err(|e| e.to_string())?
    } else {
        series
    };

    let config = AnalysisConfig::builder()
        .max_lag(max_lag)
        .significance_level(significance)
        .build()
        .map_err(|e| e.to_string())?;
    let coordinator = AnalysisCoordinator::new(config).map_err(|e| e.to_string())?;
    let result = coordinator.analyze(&series).map_err(|e| e.to_string())?;

    print_summary(&result);
    write_json(&result, output.as_ref())
}

/// Run simulate command
fn run_simulate(
    samples: usize,
    phi1: f64,
    variance: f64,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let config = Ma1Config {
        n_samples: samples,
        phi1,
        variance,
        seed,
    };
    let series = simulate_ma1(&config).map_err(|e| e.to_string())?;

    let mut csv = String::from("label,value\n");
    for (label, value) in series.labels().iter().zip(series.values()) {
        csv.push_str(&format!("{},{}\n", label, value));
    }

    match output {
        Some(path) => {
            fs::write(&path, csv).map_err(|e| format!("Failed to write output: {}", e))?;
            eprintln!("{} samples written to {:?}", series.len(), path);
        }
        None => print!("{}", csv),
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            input,
            column,
            max_lag,
            significance,
            difference,
            output,
        } => run_analyze(input, column, max_lag, significance, difference, output),

        Commands::Simulate {
            samples,
            phi1,
            variance,
            seed,
            output,
        } => run_simulate(samples, phi1, variance, seed, output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
