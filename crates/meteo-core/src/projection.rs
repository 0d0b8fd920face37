//! JSON -> metric projection.
//!
//! Upstream responses are decoded into an open `serde_json::Value` and only
//! then inspected: the `current` object is walked and every entry whose value
//! is a JSON number becomes a [`Reading`]. Everything else (timestamps, unit
//! strings, nested objects) is dropped without error.

use serde_json::Value;

use crate::error::{MeteoError, Result};

/// Key of the sub-document holding the latest observed values.
pub const CURRENT_KEY: &str = "current";

/// One numeric field from the `current` object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading<'a> {
    pub field: &'a str,
    pub value: f64,
}

/// Derive the metric name for `field` under `prefix`.
///
/// `lowercase(prefix + "_" + field)` with every `.` replaced by `_`.
pub fn metric_name(prefix: &str, field: &str) -> String {
    format!("{}_{}", prefix, field.replace('.', "_")).to_lowercase()
}

/// Decode a response body into an open JSON value.
///
/// The top level must be an object (or `null`, which projects nothing);
/// arrays and bare scalars are decode errors.
pub fn decode_body(body: &[u8]) -> Result<Value> {
    let doc: Value = serde_json::from_slice(body).map_err(|e| MeteoError::Decode(e.to_string()))?;
    if doc.is_object() || doc.is_null() {
        Ok(doc)
    } else {
        Err(MeteoError::Decode(format!("expected a JSON object, got {doc}")))
    }
}

/// Numeric entries of `doc["current"]`.
///
/// Returns `None` when `current` is absent or not an object; the caller treats
/// that as a cycle with nothing to record.
pub fn current_readings(doc: &Value) -> Option<Vec<Reading<'_>>> {
    let current = doc.get(CURRENT_KEY)?.as_object()?;
    Some(
        current
            .iter()
            .filter_map(|(field, v)| {
                v.as_f64().map(|value| Reading {
                    field: field.as_str(),
                    value,
                })
            })
            .collect(),
    )
}
