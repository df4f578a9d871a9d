//! Terminal styling utilities for the walkthrough output

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static EYE: Emoji<'_, '_> = Emoji("👀 ", "");
pub static PEN: Emoji<'_, '_> = Emoji("🖊️  ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {} {}",
        style("gapfill").cyan().bold(),
        style(format!("v{}", version)).dim()
    );
    println!(
        "    {}",
        style("Detecting and treating missing values, one strategy at a time").dim()
    );
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(input: &Path, preview_rows: usize, fill_value: f64) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Input:        {:<33}│",
        FOLDER,
        truncate_path(input, 32)
    );
    println!(
        "    │  {} Preview rows: {:<33}│",
        EYE,
        style(preview_rows).yellow()
    );
    println!(
        "    │  {} Fill value:   {:<33}│",
        PEN,
        style(fill_value).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a sub-heading inside a step
pub fn print_subheading(title: &str) {
    println!();
    println!("    {} {}", style("✧").cyan(), style(title).white());
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        ROCKET,
        style("Missing value walkthrough complete!").green().bold()
    );
    println!();
}

/// Print a table's shape with a note on remaining missing cells
pub fn print_shape(rows: usize, cols: usize, missing: usize) {
    let missing_note = if missing == 0 {
        style("no missing cells".to_string()).green()
    } else {
        style(format!("{} missing cell(s)", missing)).yellow()
    };
    println!(
        "      {} rows × {} columns, {}",
        style(rows).yellow(),
        style(cols).yellow(),
        missing_note
    );
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let tail: String = s
            .chars()
            .rev()
            .take(max_len - 3)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("...{}", tail)
    }
}
