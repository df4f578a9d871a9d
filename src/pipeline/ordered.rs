//! Row-order fills: forward fill, backward fill and linear interpolation.
//!
//! These assume the table is already sorted the way it was recorded
//! (e.g. by timestamp). Positions are row indices; no time column is read.

use anyhow::Result;
use polars::prelude::interpolate as interpolate_series;
use polars::prelude::*;
use tracing::debug;

/// Apply a null fill strategy to every column that has missing cells
fn fill_each_column(df: &DataFrame, strategy: FillNullStrategy) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        if column.null_count() == 0 {
            columns.push(column.clone());
            continue;
        }
        let filled = column.as_materialized_series().fill_null(strategy)?;
        columns.push(Column::from(filled));
    }

    Ok(DataFrame::new(columns)?)
}

/// Carry the last present value forward into each gap.
///
/// Leading missing cells have nothing before them and stay missing.
pub fn forward_fill(df: &DataFrame) -> Result<DataFrame> {
    debug!("forward fill");
    fill_each_column(df, FillNullStrategy::Forward(None))
}

/// Pull the next present value backward into each gap.
///
/// Trailing missing cells have nothing after them and stay missing.
pub fn backward_fill(df: &DataFrame) -> Result<DataFrame> {
    debug!("backward fill");
    fill_each_column(df, FillNullStrategy::Backward(None))
}

/// Interpolate missing cells in numeric columns linearly by row position.
///
/// Gaps before the first or after the last present value stay missing.
/// Numeric columns with gaps come back as Float64; other columns are
/// returned unchanged.
pub fn interpolate(df: &DataFrame) -> Result<DataFrame> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let series = column.as_materialized_series();
        if !series.dtype().is_primitive_numeric() || series.null_count() == 0 {
            columns.push(column.clone());
            continue;
        }

        let values = series.cast(&DataType::Float64)?;
        let interpolated = interpolate_series(&values, InterpolationMethod::Linear);

        debug!(column = %series.name(), "interpolated");
        columns.push(Column::from(interpolated.with_name(series.name().clone())));
    }

    Ok(DataFrame::new(columns)?)
}
