//! Error types for the missing value walkthrough.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while loading or transforming a dataset.
#[derive(Error, Debug)]
pub enum WalkthroughError {
    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Input file extension is not one we can read.
    #[error("Unsupported file format: '{0}'. Supported formats: csv, parquet")]
    UnsupportedFormat(String),

    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// A numeric statistic was requested for a non-numeric column.
    #[error("Column '{0}' is not numeric")]
    NotNumeric(String),

    /// A text statistic was requested for a non-text column.
    #[error("Column '{0}' is not a text column")]
    NotText(String),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

pub type WalkthroughResult<T> = std::result::Result<T, WalkthroughError>;
