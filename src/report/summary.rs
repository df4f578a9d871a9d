//! Missing value and imputation summaries

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use crate::pipeline::{FilledColumn, MissingSummary};
use crate::utils::print_info;

/// Render per-column missing counts and percentages
pub fn render_missing_summary(summaries: &[MissingSummary]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Column").add_attribute(Attribute::Bold),
        Cell::new("Missing").add_attribute(Attribute::Bold),
        Cell::new("Missing %").add_attribute(Attribute::Bold),
    ]);

    for summary in summaries {
        let color = if summary.missing_count == 0 {
            Color::Green
        } else if summary.missing_pct > 30.0 {
            Color::Red
        } else {
            Color::Yellow
        };

        table.add_row(vec![
            Cell::new(&summary.column),
            Cell::new(summary.missing_count)
                .fg(color)
                .set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.1}%", summary.missing_pct))
                .fg(color)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

/// Print the missing value summary table, indented
pub fn print_missing_summary(summaries: &[MissingSummary]) {
    for line in render_missing_summary(summaries).lines() {
        println!("    {}", line);
    }

    let affected = summaries.iter().filter(|s| s.missing_count > 0).count();
    println!();
    println!(
        "      {} of {} column(s) contain missing values",
        style(affected).yellow().bold(),
        summaries.len()
    );
}

/// Print which statistic was written into which column
pub fn print_fill_report(filled: &[FilledColumn], statistic: &str) {
    if filled.is_empty() {
        print_info(&format!("No columns were filled with the {}", statistic));
        return;
    }

    for entry in filled {
        println!(
            "      {} {} {} {}",
            style("•").dim(),
            entry.column,
            style("←").dim(),
            style(format!("{} {}", statistic, entry.value)).cyan()
        );
    }
}
