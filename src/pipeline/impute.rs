//! Imputation strategies: constant, mean, median and mode fills.
//!
//! Every function takes the table by reference and returns a new one, so the
//! original stays available for the next strategy.

use std::fmt;

use anyhow::Result;
use polars::prelude::*;
use tracing::debug;

use super::error::{WalkthroughError, WalkthroughResult};
use super::stats;

/// Value substituted into a column by a statistic-based fill
#[derive(Debug, Clone, PartialEq)]
pub enum FillValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for FillValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillValue::Number(v) => write!(f, "{}", v),
            FillValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}

/// A column that received imputed values
#[derive(Debug, Clone, PartialEq)]
pub struct FilledColumn {
    pub column: String,
    pub value: FillValue,
}

fn lookup<'a>(df: &'a DataFrame, name: &str) -> WalkthroughResult<&'a Series> {
    df.column(name)
        .map(|c| c.as_materialized_series())
        .map_err(|_| WalkthroughError::ColumnNotFound(name.to_string()))
}

fn is_numeric(series: &Series) -> bool {
    series.dtype().is_primitive_numeric()
}

fn is_text(series: &Series) -> bool {
    matches!(series.dtype(), DataType::String)
}

/// Present values of a numeric series as Float64, with nulls and NaNs removed
pub(crate) fn present_values(series: &Series) -> PolarsResult<Float64Chunked> {
    let cast = series.cast(&DataType::Float64)?;
    let values = cast.f64()?;
    values.filter(&values.is_not_nan())
}

/// Mean of a numeric column's present values
pub fn column_mean(df: &DataFrame, name: &str) -> WalkthroughResult<Option<f64>> {
    let series = lookup(df, name)?;
    if !is_numeric(series) {
        return Err(WalkthroughError::NotNumeric(name.to_string()));
    }
    Ok(present_values(series)?.into_series().mean())
}

/// Median of a numeric column's present values
pub fn column_median(df: &DataFrame, name: &str) -> WalkthroughResult<Option<f64>> {
    let series = lookup(df, name)?;
    if !is_numeric(series) {
        return Err(WalkthroughError::NotNumeric(name.to_string()));
    }
    Ok(present_values(series)?.into_series().median())
}

/// Most frequent present value of a text column
pub fn column_mode(df: &DataFrame, name: &str) -> WalkthroughResult<Option<String>> {
    let series = lookup(df, name)?;
    if !is_text(series) {
        return Err(WalkthroughError::NotText(name.to_string()));
    }
    Ok(stats::series_mode(series)?.map(|(value, _)| value))
}

/// Replace nulls with a single value, keeping the series' dtype and name
fn fill_nulls_with(series: &Series, value: Series) -> PolarsResult<Series> {
    let fill = value.cast(series.dtype())?.new_from_index(0, series.len());
    Ok(series
        .zip_with(&series.is_not_null(), &fill)?
        .with_name(series.name().clone()))
}

/// Whether the constant can be stored in an integer column without change
fn is_whole(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() < 1e15
}

/// Render the constant the way it lands in a text column ("0", not "0.0")
fn constant_as_text(value: f64) -> String {
    if is_whole(value) {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Replace every missing cell with a constant, whatever the column type.
///
/// Numeric columns receive the number (integer columns stay integer when the
/// constant is whole, and their present values are never converted), boolean
/// columns receive `value != 0`, and all other columns receive the
/// constant's text form.
pub fn fill_constant(df: &DataFrame, value: f64) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        if series.null_count() == 0 {
            columns.push(column.clone());
            continue;
        }

        let filled = if is_numeric(series) {
            let target = if series.dtype().is_integer() && is_whole(value) {
                series.dtype().clone()
            } else {
                DataType::Float64
            };
            fill_nulls_with(
                &series.cast(&target)?,
                Series::new(PlSmallStr::EMPTY, [value]),
            )?
        } else if matches!(series.dtype(), DataType::Boolean) {
            fill_nulls_with(series, Series::new(PlSmallStr::EMPTY, [value != 0.0]))?
        } else {
            let text = constant_as_text(value);
            fill_nulls_with(
                &series.cast(&DataType::String)?,
                Series::new(PlSmallStr::EMPTY, [text.as_str()]),
            )?
        };

        debug!(column = %series.name(), value, "constant fill");
        columns.push(Column::from(filled));
    }

    Ok(DataFrame::new(columns)?)
}

/// Fill numeric columns that have nulls with a statistic of their present values
fn fill_numeric_with<F>(df: &DataFrame, statistic: F) -> Result<(DataFrame, Vec<FilledColumn>)>
where
    F: Fn(&Series) -> Option<f64>,
{
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());
    let mut filled_columns = Vec::new();

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        if !is_numeric(series) || series.null_count() == 0 {
            columns.push(column.clone());
            continue;
        }

        match statistic(&present_values(series)?.into_series()) {
            Some(fill) => {
                let filled = fill_nulls_with(
                    &series.cast(&DataType::Float64)?,
                    Series::new(PlSmallStr::EMPTY, [fill]),
                )?;
                columns.push(Column::from(filled));
                filled_columns.push(FilledColumn {
                    column: series.name().to_string(),
                    value: FillValue::Number(fill),
                });
            }
            // All values missing: nothing to compute the statistic from
            None => columns.push(column.clone()),
        }
    }

    Ok((DataFrame::new(columns)?, filled_columns))
}

/// Fill missing numeric cells with the column mean.
///
/// Non-numeric columns are returned unchanged, nulls included.
pub fn fill_mean(df: &DataFrame) -> Result<(DataFrame, Vec<FilledColumn>)> {
    let result = fill_numeric_with(df, |present| present.mean())?;
    debug!(columns = result.1.len(), "mean fill");
    Ok(result)
}

/// Fill missing numeric cells with the column median.
pub fn fill_median(df: &DataFrame) -> Result<(DataFrame, Vec<FilledColumn>)> {
    let result = fill_numeric_with(df, |present| present.median())?;
    debug!(columns = result.1.len(), "median fill");
    Ok(result)
}

/// Fill missing text cells with the column's most frequent value.
///
/// Columns without any present value, and all non-text columns, are left
/// untouched.
pub fn fill_mode(df: &DataFrame) -> Result<(DataFrame, Vec<FilledColumn>)> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());
    let mut filled_columns = Vec::new();

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        if !is_text(series) || series.null_count() == 0 {
            columns.push(column.clone());
            continue;
        }

        match stats::series_mode(series)? {
            Some((mode, _)) => {
                let filled =
                    fill_nulls_with(series, Series::new(PlSmallStr::EMPTY, [mode.as_str()]))?;
                columns.push(Column::from(filled));
                filled_columns.push(FilledColumn {
                    column: series.name().to_string(),
                    value: FillValue::Text(mode),
                });
            }
            None => columns.push(column.clone()),
        }
    }

    debug!(columns = filled_columns.len(), "mode fill");
    Ok((DataFrame::new(columns)?, filled_columns))
}
