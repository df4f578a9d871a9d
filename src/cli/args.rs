//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use crate::pipeline::{LoadOptions, DEFAULT_NULL_VALUES};

/// gapfill - Walk through missing value detection and imputation strategies
#[derive(Parser, Debug)]
#[command(name = "gapfill")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input file path (CSV or Parquet)
    #[arg(short, long, default_value = "sensor_log.csv")]
    pub input: PathBuf,

    /// Number of rows shown in each table preview
    #[arg(short = 'n', long, default_value = "5", value_parser = validate_rows)]
    pub rows: usize,

    /// Constant written into every missing cell by the constant-fill step
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub fill_value: f64,

    /// Tokens read as missing values (comma-separated, CSV only).
    /// Empty fields are always treated as missing.
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect::<Vec<String>>()
    )]
    pub null_values: Vec<String>,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan.
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Log level for diagnostics written to stderr (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Loader options derived from the parsed arguments
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            infer_schema_length: self.infer_schema_length,
            null_values: self.null_values.clone(),
        }
    }
}

/// Validator for the preview row count
fn validate_rows(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid row count", s))?;

    if value == 0 {
        Err("rows must be at least 1".to_string())
    } else {
        Ok(value)
    }
}
