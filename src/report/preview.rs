//! Table previews, the equivalent of showing the first rows of a frame

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use polars::prelude::*;

use super::format::{format_cell, is_missing};
use crate::pipeline::total_missing;
use crate::utils::print_shape;

/// Render the first `rows` rows of a table with a leading row index
pub fn render_preview(df: &DataFrame, rows: usize) -> Result<String> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);

    let mut header = vec![Cell::new("")];
    header.extend(
        df.get_column_names()
            .iter()
            .map(|name| Cell::new(name.as_str()).add_attribute(Attribute::Bold)),
    );
    table.set_header(header);

    let shown = rows.min(df.height());
    for idx in 0..shown {
        let mut row = vec![Cell::new(idx).add_attribute(Attribute::Dim)];
        for column in df.get_columns() {
            let value = column.get(idx)?;
            let cell = if is_missing(&value) {
                Cell::new(format_cell(&value)).fg(Color::Red)
            } else {
                Cell::new(format_cell(&value))
            };
            row.push(cell);
        }
        table.add_row(row);
    }

    Ok(table.to_string())
}

/// Print a table's shape followed by an indented preview
pub fn print_preview(df: &DataFrame, rows: usize) -> Result<()> {
    let (height, width) = df.shape();
    print_shape(height, width, total_missing(df));
    println!();

    for line in render_preview(df, rows)?.lines() {
        println!("    {}", line);
    }
    Ok(())
}
