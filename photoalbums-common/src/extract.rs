//! JSON array extraction
//!
//! Turns an upstream payload into the objects it contains. The payload must be
//! a JSON array; anything else is a [`Error::MalformedPayload`]. Elements that
//! are not objects are logged at warning level and skipped as they are
//! reached, so diagnostics appear in the order the iterator is consumed.

use serde_json::Value;
use tracing::{error, info, warn};

use crate::models::RawRecord;
use crate::{Error, Result};

/// Single-pass iterator over the object elements of a JSON array
#[derive(Debug)]
pub struct ObjectElements {
    elements: std::vec::IntoIter<Value>,
}

impl Iterator for ObjectElements {
    type Item = RawRecord;

    fn next(&mut self) -> Option<RawRecord> {
        for element in self.elements.by_ref() {
            match element {
                Value::Object(record) => return Some(record),
                other => warn!("Received non-object element in JSON array {}", other),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.elements.len()))
    }
}

/// Parse `json` as an array and iterate the objects inside it.
///
/// Fails only when the text is not a JSON array at all; callers must not try
/// to salvage anything from such a payload.
pub fn extract_objects(json: &str) -> Result<ObjectElements> {
    info!("Loading json array");

    match serde_json::from_str::<Value>(json) {
        Ok(Value::Array(elements)) => Ok(ObjectElements {
            elements: elements.into_iter(),
        }),
        Ok(other) => {
            error!(kind = value_kind(&other), "Invalid JSON received: top-level value is not an array");
            Err(Error::MalformedPayload {
                json: json.to_string(),
            })
        }
        Err(e) => {
            error!(error = %e, "Invalid JSON received");
            Err(Error::MalformedPayload {
                json: json.to_string(),
            })
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
