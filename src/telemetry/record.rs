//! Typed view of one telemetry event line
//!
//! Conversion from loosely-typed JSON into an explicit optional-field
//! schema, so missing, null, and wrong-type fields are distinguishable.

use serde_json::Value;

use super::TelemetryError;

/// One parsed telemetry event.
///
/// All fields are optional in the wire format; extra fields are ignored.
/// A missing or `null` identifier normalizes to `None`, which the
/// aggregate treats as its own distinct "unknown" bucket.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub node_id: Option<String>,
    pub task_id: Option<String>,
    pub success: Option<bool>,
    /// Seconds, taken from the nested `metrics.exec_time` field.
    pub exec_time: Option<f64>,
}

impl EventRecord {
    /// Convert a parsed JSON line into a typed record.
    ///
    /// Fails when the value is not a JSON object, or when
    /// `metrics.exec_time` is present but cannot be coerced to a float.
    /// Both failures are fatal to the summarize pass.
    pub fn from_value(value: &Value) -> Result<Self, TelemetryError> {
        let object = value
            .as_object()
            .ok_or_else(|| TelemetryError::NotAnObject(value.clone()))?;

        let exec_time = object
            .get("metrics")
            .and_then(|m| m.get("exec_time"))
            .map(coerce_exec_time)
            .transpose()?;

        Ok(Self {
            node_id: identifier(object.get("node_id")),
            task_id: identifier(object.get("task_id")),
            success: object.get("success").and_then(Value::as_bool),
            exec_time,
        })
    }
}

/// Normalize an identifier field: absent and `null` both become `None`,
/// non-string scalars keep their JSON rendering so distinct values stay
/// distinct.
fn identifier(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Coerce an `exec_time` value to seconds.
///
/// JSON numbers pass through, numeric strings parse, anything else is a
/// conversion error.
fn coerce_exec_time(value: &Value) -> Result<f64, TelemetryError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| TelemetryError::NonNumericDuration(value.clone())),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| TelemetryError::NonNumericDuration(value.clone())),
        _ => Err(TelemetryError::NonNumericDuration(value.clone())),
    }
}
