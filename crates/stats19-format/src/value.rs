//! Polars `AnyValue` helpers shared by the formatting passes.

use polars::prelude::AnyValue;

/// String form of a cell; `Null` becomes the empty string.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "1" } else { "0" }.to_string(),
        other => other.to_string(),
    }
}

/// Trimmed, non-empty string form of a cell.
pub fn any_to_nonempty(value: AnyValue<'_>) -> Option<String> {
    let text = any_to_string(value);
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Numeric form of a cell, parsing text columns when needed.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => s.trim().parse().ok(),
        AnyValue::StringOwned(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Canonical lookup key for a categorical code cell.
///
/// Integer codes render bare ("1", "-1"); whole floats collapse to the
/// same form so a nullable-float parse still matches the map.
pub fn code_key(value: &AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::Float32(v) => Some(format_numeric(f64::from(*v))),
        AnyValue::Float64(v) => Some(format_numeric(*v)),
        AnyValue::String(s) => Some(s.trim().to_string()),
        AnyValue::StringOwned(s) => Some(s.trim().to_string()),
        other => any_to_nonempty(other.clone()),
    }
}

fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_codes_render_bare() {
        assert_eq!(code_key(&AnyValue::Int64(1)).as_deref(), Some("1"));
        assert_eq!(code_key(&AnyValue::Int64(-1)).as_deref(), Some("-1"));
        assert_eq!(code_key(&AnyValue::Float64(2.0)).as_deref(), Some("2"));
        assert_eq!(code_key(&AnyValue::String(" 9 ")).as_deref(), Some("9"));
        assert_eq!(code_key(&AnyValue::Null), None);
    }

    #[test]
    fn fractional_floats_keep_their_fraction() {
        assert_eq!(code_key(&AnyValue::Float64(1.5)).as_deref(), Some("1.5"));
    }
}
