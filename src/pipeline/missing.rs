//! Missing value diagnosis and row/column dropping

use anyhow::Result;
use polars::prelude::*;
use tracing::debug;

/// Missing value counts for a single column
#[derive(Debug, Clone, PartialEq)]
pub struct MissingSummary {
    pub column: String,
    pub missing_count: usize,
    /// Share of missing cells as a percentage (0-100)
    pub missing_pct: f64,
}

/// Count missing cells per column, in column order.
///
/// A table without rows reports 0% for every column.
pub fn analyze_missing_values(df: &DataFrame) -> Result<Vec<MissingSummary>> {
    let rows = df.height();

    let summaries = df
        .get_columns()
        .iter()
        .map(|column| {
            let missing_count = column.null_count();
            let missing_pct = if rows == 0 {
                0.0
            } else {
                missing_count as f64 / rows as f64 * 100.0
            };
            MissingSummary {
                column: column.name().to_string(),
                missing_count,
                missing_pct,
            }
        })
        .collect();

    Ok(summaries)
}

/// Total number of missing cells across the whole table
pub fn total_missing(df: &DataFrame) -> usize {
    df.get_columns().iter().map(|c| c.null_count()).sum()
}

/// Keep only the rows that have no missing cell in any column
pub fn drop_rows_with_missing(df: &DataFrame) -> Result<DataFrame> {
    let mut mask = BooleanChunked::full("complete".into(), true, df.height());
    for column in df.get_columns() {
        let present = column.as_materialized_series().is_not_null();
        mask = &mask & &present;
    }

    let kept = df.filter(&mask)?;
    debug!(
        dropped = df.height() - kept.height(),
        kept = kept.height(),
        "dropped incomplete rows"
    );
    Ok(kept)
}

/// Keep only the columns that have no missing cell in any row
pub fn drop_columns_with_missing(df: &DataFrame) -> Result<DataFrame> {
    let incomplete: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|c| c.null_count() > 0)
        .map(|c| c.name().to_string())
        .collect();

    debug!(columns = ?incomplete, "dropping incomplete columns");
    Ok(df.drop_many(&incomplete))
}
