//! Cell and statistic formatting shared by the renderers

use polars::prelude::AnyValue;

/// Text shown for a missing cell
pub const MISSING: &str = "NaN";

/// Format a float compactly: integral values keep one decimal,
/// others drop trailing zeros after four decimals.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return MISSING.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{:.1}", value);
    }
    let formatted = format!("{:.4}", value);
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Format a statistic with fixed precision, `NaN` when not available
pub fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.6}", v),
        _ => MISSING.to_string(),
    }
}

/// Whether a cell holds a missing value (null, or a float NaN)
pub fn is_missing(value: &AnyValue) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::Float64(v) => v.is_nan(),
        AnyValue::Float32(v) => v.is_nan(),
        _ => false,
    }
}

/// Format a single table cell for display
pub fn format_cell(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => MISSING.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Float64(v) => format_float(*v),
        AnyValue::Float32(v) => format_float(*v as f64),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}
