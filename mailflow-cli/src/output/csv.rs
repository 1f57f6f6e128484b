//! CSV output formatting for data export.
//!
//! Single objects become a header row plus one value row; arrays of objects
//! become a header row plus one row per item. Nested arrays are joined with
//! `;` inside a single field.

use super::OutputConfig;
use serde::Serialize;
use serde_json::{Map, Value};

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    /// Format data as CSV string
    pub fn format<T: Serialize + ?Sized>(data: &T, _config: &OutputConfig) -> String {
        match serde_json::to_value(data) {
            Ok(Value::Array(arr)) => Self::format_array_value(&arr),
            Ok(Value::Object(obj)) => Self::format_object_value(&obj),
            Ok(other) => Self::value_to_csv(&other),
            Err(_) => String::new(),
        }
    }

    /// Format rows of pre-rendered strings under the given headers
    pub fn from_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut lines = vec![headers.join(",")];
        for row in rows {
            let escaped: Vec<String> = row.iter().map(|s| Self::escape_value(s)).collect();
            lines.push(escaped.join(","));
        }
        lines.join("\n")
    }

    fn format_array_value(arr: &[Value]) -> String {
        let headers: Vec<String> = match arr.first() {
            Some(Value::Object(first)) => first.keys().cloned().collect(),
            Some(_) => return arr.iter().map(Self::value_to_csv).collect::<Vec<_>>().join("\n"),
            None => return String::new(),
        };

        let rows: Vec<Vec<String>> = arr
            .iter()
            .map(|item| {
                headers
                    .iter()
                    .map(|h| item.get(h).map(Self::value_to_csv).unwrap_or_default())
                    .collect()
            })
            .collect();

        let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
        Self::from_rows(&header_refs, &rows)
    }

    fn format_object_value(obj: &Map<String, Value>) -> String {
        let headers: Vec<&str> = obj.keys().map(String::as_str).collect();
        let row: Vec<String> = obj.values().map(Self::value_to_csv).collect();
        Self::from_rows(&headers, &[row])
    }

    fn value_to_csv(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            Value::Array(items) => items
                .iter()
                .map(Self::value_to_csv)
                .collect::<Vec<_>>()
                .join(";"),
            Value::Object(_) => value.to_string(),
        }
    }

    /// Quote a field if it contains a delimiter, quote or newline
    fn escape_value(s: &str) -> String {
        if s.contains(',') || s.contains('"') || s.contains('\n') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
