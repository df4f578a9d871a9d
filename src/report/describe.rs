//! Rendering of describe-style statistics, one column per table column

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Table};

use super::format::{format_stat, MISSING};
use crate::pipeline::{ColumnDescription, ColumnStats};

const TEXT_ROWS: [&str; 3] = ["unique", "top", "freq"];
const NUMERIC_ROWS: [&str; 7] = ["mean", "std", "min", "25%", "50%", "75%", "max"];

fn text_value(stats: &ColumnStats, row: &str) -> String {
    match stats {
        ColumnStats::Text { unique, top, freq } => match row {
            "unique" => unique.to_string(),
            "top" => top.clone().unwrap_or_else(|| MISSING.to_string()),
            "freq" => freq.map_or_else(|| MISSING.to_string(), |f| f.to_string()),
            _ => MISSING.to_string(),
        },
        _ => MISSING.to_string(),
    }
}

fn numeric_value(stats: &ColumnStats, row: &str) -> String {
    match stats {
        ColumnStats::Numeric {
            mean,
            std,
            min,
            q25,
            median,
            q75,
            max,
        } => {
            let value = match row {
                "mean" => *mean,
                "std" => *std,
                "min" => *min,
                "25%" => *q25,
                "50%" => *median,
                "75%" => *q75,
                "max" => *max,
                _ => None,
            };
            format_stat(value)
        }
        _ => MISSING.to_string(),
    }
}

/// Render statistics as rows and the described columns as table columns.
///
/// Text rows are only shown when at least one text column is present, and
/// likewise for numeric rows.
pub fn render_description(descriptions: &[ColumnDescription]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("")];
    header.extend(
        descriptions
            .iter()
            .map(|d| Cell::new(&d.column).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    let stat_cell = |label: &str| Cell::new(label).add_attribute(Attribute::Dim);
    let value_cell = |text: String| Cell::new(text).set_alignment(CellAlignment::Right);

    let mut count_row = vec![stat_cell("count")];
    count_row.extend(descriptions.iter().map(|d| value_cell(d.count.to_string())));
    table.add_row(count_row);

    let has_text = descriptions
        .iter()
        .any(|d| matches!(d.stats, ColumnStats::Text { .. }));
    let has_numeric = descriptions
        .iter()
        .any(|d| matches!(d.stats, ColumnStats::Numeric { .. }));

    if has_text {
        for label in TEXT_ROWS {
            let mut row = vec![stat_cell(label)];
            row.extend(
                descriptions
                    .iter()
                    .map(|d| value_cell(text_value(&d.stats, label))),
            );
            table.add_row(row);
        }
    }

    if has_numeric {
        for label in NUMERIC_ROWS {
            let mut row = vec![stat_cell(label)];
            row.extend(
                descriptions
                    .iter()
                    .map(|d| value_cell(numeric_value(&d.stats, label))),
            );
            table.add_row(row);
        }
    }

    table.to_string()
}

/// Print a describe table, indented
pub fn print_description(descriptions: &[ColumnDescription]) {
    for line in render_description(descriptions).lines() {
        println!("    {}", line);
    }
}
