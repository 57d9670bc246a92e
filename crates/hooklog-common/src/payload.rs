//! Hook payload as delivered by the host on stdin

use crate::HookError;
use serde_json::{Map, Value};

/// Fallback used when the payload carries no string `session_id`.
pub const UNKNOWN_SESSION: &str = "unknown";

/// A loosely-typed hook event.
///
/// The host owns the schema, so nothing beyond "is a JSON object" is
/// enforced. Every field is kept verbatim (in input order) so it can be
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct HookPayload {
    fields: Map<String, Value>,
}

impl HookPayload {
    /// Parse stdin text into a payload.
    ///
    /// Valid JSON that is not an object (array, string, number, null) is
    /// rejected the same way as invalid JSON.
    pub fn parse(input: &str) -> Result<Self, HookError> {
        match serde_json::from_str(input).map_err(HookError::Parse)? {
            Value::Object(fields) => Ok(Self { fields }),
            _ => Err(HookError::NotAnObject),
        }
    }

    /// `session_id` field, or `"unknown"` when absent or not a string.
    pub fn session_id(&self) -> &str {
        self.str_field("session_id").unwrap_or(UNKNOWN_SESSION)
    }

    /// `prompt` field, or `""` when absent or not a string.
    pub fn prompt(&self) -> &str {
        self.str_field("prompt").unwrap_or("")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}
