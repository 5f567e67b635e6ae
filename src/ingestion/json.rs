//! JSON reading.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single object: `{"a":1}`
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! Each object becomes one [`Record`] with keys in document order. Scalars map to the closest
//! [`Value`]; nested arrays and objects are kept as their JSON text.

use std::fs;
use std::path::Path;

use crate::error::{FrameError, FrameResult};
use crate::types::{Frame, Record, Value};

/// Read a JSON or NDJSON file into a [`Frame`].
pub fn read_json_from_path(path: impl AsRef<Path>) -> FrameResult<Frame> {
    let text = fs::read_to_string(path)?;
    read_json_from_str(&text)
}

/// Read JSON or NDJSON held in memory.
pub fn read_json_from_str(input: &str) -> FrameResult<Frame> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FrameError::UnsupportedFormat {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => records_from_values(&items),
            serde_json::Value::Object(_) => records_from_values(std::slice::from_ref(&v)),
            _ => Err(FrameError::UnsupportedFormat {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        let mut values = Vec::new();
        for line in trimmed.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            values.push(serde_json::from_str::<serde_json::Value>(line)?);
        }
        records_from_values(&values)
    }
}

fn records_from_values(values: &[serde_json::Value]) -> FrameResult<Frame> {
    let mut rows: Vec<Record> = Vec::with_capacity(values.len());

    for (idx0, v) in values.iter().enumerate() {
        let obj = v.as_object().ok_or_else(|| FrameError::UnsupportedFormat {
            message: format!("row {} is not a json object", idx0 + 1),
        })?;
        rows.push(obj.iter().map(|(k, jv)| (k.as_str(), convert_json_value(jv))).collect());
    }

    Ok(Frame::new(rows))
}

fn convert_json_value(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Int64(i),
            None => Value::Float64(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => Value::Utf8(s.clone()),
        nested => Value::Utf8(nested.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn array_of_objects() {
        let df = read_json_from_str(r#"[{"k":"a","v":1},{"k":"b","v":2.5,"ok":true}]"#).unwrap();
        assert_eq!(df.rows[0], record! { "k" => "a", "v" => 1 });
        assert_eq!(df.rows[1], record! { "k" => "b", "v" => 2.5, "ok" => true });
    }

    #[test]
    fn ndjson_and_nested_values() {
        let input = "{\"k\":null,\"tags\":[1,2]}\n\n{\"k\":\"x\"}\n";
        let df = read_json_from_str(input).unwrap();
        assert_eq!(df.row_count(), 2);
        assert_eq!(df.rows[0].get("k"), Some(&Value::Null));
        assert_eq!(df.rows[0].get("tags"), Some(&Value::from("[1,2]")));
    }

    #[test]
    fn rejects_scalars_and_non_objects() {
        assert!(read_json_from_str("42").is_err());
        let err = read_json_from_str("[{\"a\":1}, 3]").unwrap_err();
        assert!(err.to_string().contains("row 2 is not a json object"));
        assert!(read_json_from_str("   ").is_err());
    }
}
