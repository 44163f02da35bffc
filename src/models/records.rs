//! Record types crossing the JavaScript boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One row of the series table.
///
/// `series_id` is opaque: the page passes through whatever identifier the
/// upstream catalog service returned (usually a number) and it is rendered
/// as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub series_id: Value,
    pub series_name: String,
}

/// Textual form of an opaque record value.
///
/// Strings render bare (no surrounding quotes), other scalars use their
/// canonical display form (`null` included), composites fall back to
/// compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_text_string_renders_bare() {
        assert_eq!(value_text(&json!("north fork")), "north fork");
    }

    #[test]
    fn test_value_text_scalars() {
        assert_eq!(value_text(&json!(42)), "42");
        assert_eq!(value_text(&json!(2.5)), "2.5");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&Value::Null), "null");
    }

    #[test]
    fn test_value_text_composite_falls_back_to_json() {
        assert_eq!(value_text(&json!([1, 2])), "[1,2]");
        assert_eq!(value_text(&json!({"code": "pH"})), r#"{"code":"pH"}"#);
    }

    #[test]
    fn test_series_record_decodes_numeric_id() {
        let record: SeriesRecord =
            serde_json::from_value(json!({"series_id": 7, "series_name": "Discharge"})).unwrap();
        assert_eq!(value_text(&record.series_id), "7");
        assert_eq!(record.series_name, "Discharge");
    }

    #[test]
    fn test_series_record_decodes_string_id() {
        let record: SeriesRecord =
            serde_json::from_value(json!({"series_id": "TS-01", "series_name": "Stage"})).unwrap();
        assert_eq!(value_text(&record.series_id), "TS-01");
    }
}
