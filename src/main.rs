//! gapfill: Missing Value Walkthrough CLI
//!
//! Loads one dataset and shows, step by step, how each missing value
//! strategy changes it.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gapfill::cli::Cli;
use gapfill::pipeline::{
    analyze_missing_values, backward_fill, describe, drop_columns_with_missing,
    drop_rows_with_missing, fill_constant, fill_mean, fill_median, fill_mode, forward_fill,
    interpolate, load_dataset_with_progress,
};
use gapfill::report::{print_description, print_fill_report, print_missing_summary, print_preview};
use gapfill::utils::{
    print_banner, print_completion, print_config, print_step_header, print_subheading,
    print_success,
};

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let rows = cli.rows;

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&cli.input, rows, cli.fill_value);

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let (df, _rows, _cols, memory_mb) = load_dataset_with_progress(&cli.input, &cli.load_options())?;
    tracing::debug!(memory_mb, "estimated memory");
    print_success("Dataset loaded");
    print_preview(&df, rows)?;

    // Step 2: Diagnose
    print_step_header(2, "Missing Value Diagnosis");
    let missing = analyze_missing_values(&df)?;
    print_missing_summary(&missing);

    // Step 3: Drop rows
    print_step_header(3, "Drop Rows With Missing Values");
    let dropped_rows = drop_rows_with_missing(&df)?;
    print_preview(&dropped_rows, rows)?;

    // Step 4: Drop columns
    print_step_header(4, "Drop Columns With Missing Values");
    let dropped_cols = drop_columns_with_missing(&df)?;
    print_preview(&dropped_cols, rows)?;

    // Step 5: Constant fill
    print_step_header(5, &format!("Fill With Constant ({})", cli.fill_value));
    let constant_filled = fill_constant(&df, cli.fill_value)?;
    print_preview(&constant_filled, rows)?;

    // Step 6: Mean fill
    print_step_header(6, "Fill Numeric Columns With Mean");
    let (mean_filled, filled) = fill_mean(&df)?;
    print_fill_report(&filled, "mean");
    print_preview(&mean_filled, rows)?;

    // Step 7: Median fill
    print_step_header(7, "Fill Numeric Columns With Median");
    let (median_filled, filled) = fill_median(&df)?;
    print_fill_report(&filled, "median");
    print_preview(&median_filled, rows)?;

    // Step 8: Mode fill
    print_step_header(8, "Fill Text Columns With Mode");
    let (mode_filled, filled) = fill_mode(&df)?;
    print_fill_report(&filled, "mode");
    print_preview(&mode_filled, rows)?;

    // Step 9: Forward fill
    print_step_header(9, "Forward Fill");
    print_preview(&forward_fill(&df)?, rows)?;

    // Step 10: Backward fill
    print_step_header(10, "Backward Fill");
    print_preview(&backward_fill(&df)?, rows)?;

    // Step 11: Interpolation
    print_step_header(11, "Linear Interpolation");
    print_preview(&interpolate(&df)?, rows)?;

    // Step 12: Summary statistics, before and after mean imputation
    print_step_header(12, "Summary Statistics");
    print_subheading("Before imputation");
    print_description(&describe(&df)?);
    print_subheading("After mean imputation");
    print_description(&describe(&mean_filled)?);

    print_completion();

    Ok(())
}
