//! Dataset loader for CSV and Parquet files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

use super::error::WalkthroughError;
use crate::utils::{create_spinner, finish_with_success};

/// Tokens read as missing when no explicit list is given.
///
/// The same set data-frame readers commonly treat as missing by default.
pub const DEFAULT_NULL_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options controlling how an input file is parsed
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Rows used for CSV schema inference. 0 means a full table scan.
    pub infer_schema_length: usize,
    /// Tokens treated as missing in CSV input, on top of empty fields
    pub null_values: Vec<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            infer_schema_length: 10000,
            null_values: DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Load a dataset lazily from a file (CSV or Parquet based on extension)
pub fn load_dataset(path: &Path, options: &LoadOptions) -> Result<LazyFrame> {
    if !path.exists() {
        return Err(WalkthroughError::FileNotFound(path.to_path_buf()).into());
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let lf = match extension.as_str() {
        "csv" => {
            let schema_length = if options.infer_schema_length == 0 {
                None
            } else {
                Some(options.infer_schema_length)
            };

            let null_values = if options.null_values.is_empty() {
                None
            } else {
                Some(NullValues::AllColumns(
                    options
                        .null_values
                        .iter()
                        .map(|s| PlSmallStr::from(s.as_str()))
                        .collect(),
                ))
            };

            LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(schema_length)
                .with_null_values(null_values)
                .finish()
                .with_context(|| format!("Failed to load CSV file: {}", path.display()))?
        }
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        _ => return Err(WalkthroughError::UnsupportedFormat(extension).into()),
    };

    Ok(lf)
}

/// Load a dataset into memory, showing a spinner while reading.
///
/// Returns the DataFrame along with its row count, column count and
/// estimated memory footprint in megabytes.
pub fn load_dataset_with_progress(
    path: &Path,
    options: &LoadOptions,
) -> Result<(DataFrame, usize, usize, f64)> {
    let lf = load_dataset(path, options)?;

    let spinner = create_spinner(&format!("Reading {}...", path.display()));
    let df = lf
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);

    info!(rows, cols, path = %path.display(), "dataset loaded");
    debug!(schema = ?df.schema(), "inferred schema");

    Ok((df, rows, cols, memory_mb))
}

/// Get the column names of a dataset without loading its rows
pub fn get_column_names(path: &Path, options: &LoadOptions) -> Result<Vec<String>> {
    let schema = load_dataset(path, options)?
        .collect_schema()
        .with_context(|| format!("Failed to read schema: {}", path.display()))?;

    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}
