//! Unit tests for dataset loader

use gapfill::pipeline::{
    get_column_names, load_dataset_with_progress, LoadOptions, WalkthroughError,
};
use polars::prelude::*;

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_load_csv_file() {
    let (_temp_dir, csv_path) = write_csv("test.csv", "a,b,c\n1,2,3\n4,5,6\n");

    let (df, rows, cols, mem_mb) =
        load_dataset_with_progress(&csv_path, &LoadOptions::default()).unwrap();

    assert_eq!(rows, 2, "Should have 2 data rows");
    assert_eq!(cols, 3, "Should have 3 columns");
    assert_eq!(df.get_column_names(), &["a", "b", "c"]);
    assert!(mem_mb >= 0.0, "Memory estimate should be non-negative");
}

#[test]
fn test_load_parquet_file() {
    let mut df = create_sensor_dataframe();
    let (_temp_dir, parquet_path) = create_temp_parquet(&mut df);

    let (loaded, rows, cols, _) =
        load_dataset_with_progress(&parquet_path, &LoadOptions::default()).unwrap();

    assert_eq!(rows, 6);
    assert_eq!(cols, 5);
    assert_eq!(loaded.column("temperature").unwrap().null_count(), 2);
}

#[test]
fn test_empty_fields_are_missing() {
    let (_temp_dir, csv_path) = write_csv("missing.csv", "a,b,c\n1,,3\n,2,\n4,5,6\n");

    let (df, rows, cols, _) =
        load_dataset_with_progress(&csv_path, &LoadOptions::default()).unwrap();

    assert_eq!(rows, 3);
    assert_eq!(cols, 3);

    let null_counts: Vec<usize> = df.get_columns().iter().map(|c| c.null_count()).collect();
    assert_eq!(null_counts, vec![1, 1, 1]);
}

#[test]
fn test_null_tokens_are_missing() {
    let (_temp_dir, csv_path) =
        write_csv("tokens.csv", "reading,status\n1.5,ok\nNA,NA\nNaN,fault\n2.5,null\n");

    let (df, _, _, _) = load_dataset_with_progress(&csv_path, &LoadOptions::default()).unwrap();

    let reading = df.column("reading").unwrap();
    assert_eq!(reading.dtype(), &DataType::Float64, "NA tokens should not force a text column");
    assert_eq!(reading.null_count(), 2);
    assert_eq!(df.column("status").unwrap().null_count(), 2);
}

#[test]
fn test_common_reader_missing_markers() {
    let (_temp_dir, csv_path) =
        write_csv("markers.csv", "temp\n1.0\nn/a\n3.0\n#N/A\n<NA>\n-nan\n5.0\n");

    let (df, rows, _, _) = load_dataset_with_progress(&csv_path, &LoadOptions::default()).unwrap();

    let temp = df.column("temp").unwrap();
    assert_eq!(rows, 7);
    assert_eq!(temp.dtype(), &DataType::Float64, "Markers should not force a text column");
    assert_eq!(temp.null_count(), 4);
    assert_eq!(
        f64_values(&df, "temp"),
        vec![Some(1.0), None, Some(3.0), None, None, None, Some(5.0)]
    );
}

#[test]
fn test_empty_null_token_list_keeps_tokens_as_text() {
    let (_temp_dir, csv_path) = write_csv("tokens.csv", "status\nok\nNA\n");
    let options = LoadOptions {
        null_values: Vec::new(),
        ..LoadOptions::default()
    };

    let (df, _, _, _) = load_dataset_with_progress(&csv_path, &options).unwrap();

    assert_eq!(df.column("status").unwrap().null_count(), 0);
    assert_eq!(
        str_values(&df, "status"),
        vec![Some("ok".to_string()), Some("NA".to_string())]
    );
}

#[test]
fn test_get_column_names_csv() {
    let (_temp_dir, csv_path) = write_csv("test.csv", "col_a,col_b,col_c\n1,2,3\n");

    let columns = get_column_names(&csv_path, &LoadOptions::default()).unwrap();

    assert_eq!(columns, vec!["col_a", "col_b", "col_c"]);
}

#[test]
fn test_unsupported_format() {
    let (_temp_dir, bad_path) = write_csv("test.xlsx", "a\n1\n");

    let result = load_dataset_with_progress(&bad_path, &LoadOptions::default());

    let err = result.unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<WalkthroughError>(),
            Some(WalkthroughError::UnsupportedFormat(ext)) if ext == "xlsx"
        ),
        "Expected unsupported format error, got: {}",
        err
    );
}

#[test]
fn test_nonexistent_file() {
    let path = std::path::Path::new("/nonexistent/path/to/sensor_log.csv");

    let err = load_dataset_with_progress(path, &LoadOptions::default()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<WalkthroughError>(),
        Some(WalkthroughError::FileNotFound(_))
    ));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_schema_inference_length() {
    let mut contents = String::from("tricky_col\n");
    for i in 0..100 {
        contents.push_str(&format!("{}\n", i));
    }
    let (_temp_dir, csv_path) = write_csv("inference.csv", &contents);

    let short = LoadOptions {
        infer_schema_length: 10,
        ..LoadOptions::default()
    };
    let full_scan = LoadOptions {
        infer_schema_length: 0,
        ..LoadOptions::default()
    };

    let (df_short, _, _, _) = load_dataset_with_progress(&csv_path, &short).unwrap();
    let (df_full, _, _, _) = load_dataset_with_progress(&csv_path, &full_scan).unwrap();

    assert_eq!(df_short.height(), 100);
    assert_eq!(df_full.height(), 100);
}
