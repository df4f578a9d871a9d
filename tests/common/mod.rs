//! Shared test utilities and fixture generators

#![allow(dead_code)]

use polars::prelude::*;
use rand::prelude::*;
use rand::SeedableRng;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a small sensor log with known gaps
///
/// This DataFrame includes:
/// - `timestamp`: complete text column
/// - `sensor_id`: complete integer column
/// - `temperature`: rows 1 and 4 missing
/// - `humidity`: rows 0 and 3 missing (leading gap)
/// - `status`: rows 1 and 4 missing, "ok" is the mode
///
/// Only rows 2 and 5 are complete.
pub fn create_sensor_dataframe() -> DataFrame {
    df! {
        "timestamp" => [
            "2024-01-01 00:00", "2024-01-01 01:00", "2024-01-01 02:00",
            "2024-01-01 03:00", "2024-01-01 04:00", "2024-01-01 05:00",
        ],
        "sensor_id" => [1i64, 1, 2, 2, 3, 3],
        "temperature" => [Some(21.0f64), None, Some(23.0), Some(24.0), None, Some(26.0)],
        "humidity" => [None, Some(40.0f64), Some(42.0), None, Some(46.0), Some(48.0)],
        "status" => [Some("ok"), None, Some("ok"), Some("fault"), None, Some("ok")],
    }
    .unwrap()
}

/// Create a DataFrame with random gaps for property checks
pub fn create_random_dataframe(rows: usize, numeric_cols: usize, missing_rate: f64, seed: u64) -> DataFrame {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let labels = ["ok", "fault", "idle"];

    let mut columns: Vec<Column> = Vec::with_capacity(numeric_cols + 1);
    for i in 0..numeric_cols {
        let values: Vec<Option<f64>> = (0..rows)
            .map(|_| {
                if rng.gen::<f64>() < missing_rate {
                    None
                } else {
                    Some(rng.gen_range(-50.0..50.0))
                }
            })
            .collect();
        columns.push(Column::new(format!("reading_{}", i).into(), values));
    }

    let status: Vec<Option<&str>> = (0..rows)
        .map(|_| {
            if rng.gen::<f64>() < missing_rate {
                None
            } else {
                Some(labels[rng.gen_range(0..labels.len())])
            }
        })
        .collect();
    columns.push(Column::new("status".into(), status));

    DataFrame::new(columns).unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Write raw CSV text to a file with the given name in a fresh temp directory
pub fn write_csv(file_name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join(file_name);

    let mut file = std::fs::File::create(&csv_path).unwrap();
    write!(file, "{}", contents).unwrap();

    (temp_dir, csv_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(rows, expected_rows, "Row count mismatch: expected {}, got {}", expected_rows, rows);
    assert_eq!(cols, expected_cols, "Column count mismatch: expected {}, got {}", expected_cols, cols);
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}

/// Assert that a DataFrame does NOT contain specific columns
pub fn assert_missing_columns(df: &DataFrame, unexpected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in unexpected_cols {
        assert!(
            !actual_cols.contains(&col.to_string()),
            "Unexpected column still present: '{}'",
            col
        );
    }
}

/// Values of a Float64 column as options
pub fn f64_values(df: &DataFrame, name: &str) -> Vec<Option<f64>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .f64()
        .unwrap()
        .into_iter()
        .collect()
}

/// Values of a String column as owned options
pub fn str_values(df: &DataFrame, name: &str) -> Vec<Option<String>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(|s| s.to_string()))
        .collect()
}
