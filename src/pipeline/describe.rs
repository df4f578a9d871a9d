//! Describe-style summary statistics per column

use anyhow::Result;
use polars::prelude::*;

use super::impute::present_values;
use super::stats;

/// Statistics that depend on the column type
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnStats {
    Numeric {
        mean: Option<f64>,
        std: Option<f64>,
        min: Option<f64>,
        q25: Option<f64>,
        median: Option<f64>,
        q75: Option<f64>,
        max: Option<f64>,
    },
    /// Text and boolean columns
    Text {
        unique: usize,
        top: Option<String>,
        freq: Option<usize>,
    },
    /// Temporal and nested columns only report a count
    Other,
}

/// Summary of one column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescription {
    pub column: String,
    pub dtype: String,
    /// Number of present (non-missing) cells
    pub count: usize,
    pub stats: ColumnStats,
}

fn numeric_stats(series: &Series) -> PolarsResult<(usize, ColumnStats)> {
    let values = present_values(series)?;
    let count = values.len();
    let std = if count < 2 { None } else { values.std(1) };

    let stats = ColumnStats::Numeric {
        mean: values.mean(),
        std,
        min: values.min(),
        q25: values.quantile(0.25, QuantileMethod::Linear)?,
        median: values.median(),
        q75: values.quantile(0.75, QuantileMethod::Linear)?,
        max: values.max(),
    };
    Ok((count, stats))
}

fn categorical_stats(series: &Series) -> PolarsResult<(usize, ColumnStats)> {
    let present = series.drop_nulls();
    let mode = stats::series_mode(&present)?;

    let stats = ColumnStats::Text {
        unique: present.n_unique()?,
        top: mode.as_ref().map(|(value, _)| value.clone()),
        freq: mode.map(|(_, freq)| freq),
    };
    Ok((present.len(), stats))
}

fn describe_series(series: &Series) -> PolarsResult<ColumnDescription> {
    let (count, stats) = match series.dtype() {
        dtype if dtype.is_primitive_numeric() => numeric_stats(series)?,
        DataType::String | DataType::Boolean => categorical_stats(series)?,
        _ => (series.len() - series.null_count(), ColumnStats::Other),
    };

    Ok(ColumnDescription {
        column: series.name().to_string(),
        dtype: series.dtype().to_string(),
        count,
        stats,
    })
}

/// Describe every column of the table, in column order
pub fn describe(df: &DataFrame) -> Result<Vec<ColumnDescription>> {
    let descriptions = df
        .get_columns()
        .iter()
        .map(|c| describe_series(c.as_materialized_series()))
        .collect::<PolarsResult<Vec<_>>>()?;
    Ok(descriptions)
}
