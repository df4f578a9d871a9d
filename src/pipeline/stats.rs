//! Categorical statistics shared by mode-fill and the describe summary.
//!
//! Numeric statistics come straight from polars; the mode is counted here so
//! ties resolve the same way on every run.

use std::collections::BTreeMap;

use polars::prelude::*;

/// Most frequent value and its count.
///
/// Ties go to the lexicographically smallest value.
pub fn mode<'a, I>(values: I) -> Option<(String, usize)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((value, count)),
        }
    }

    best.map(|(value, count)| (value.to_string(), count))
}

/// Mode of a series' present values, compared by their text form
pub fn series_mode(series: &Series) -> PolarsResult<Option<(String, usize)>> {
    let present = series.drop_nulls().cast(&DataType::String)?;
    Ok(mode(present.str()?.into_iter().flatten()))
}
