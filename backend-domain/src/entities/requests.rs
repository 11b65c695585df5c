// Request entities
// Field extraction from loosely-typed JSON request bodies

use serde_json::{Map, Value};

use crate::value_objects::Location;

pub type JsonObject = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn from_payload(payload: &JsonObject) -> Self {
        Self {
            username: present_string(payload.get("username")),
            password: present_string(payload.get("password")),
        }
    }

    /// Names of the fields that were not supplied, in request order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.username.is_none() {
            missing.push("username");
        }
        if self.password.is_none() {
            missing.push("password");
        }
        missing
    }
}

/// A scan as submitted by a device, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSubmission {
    pub username: Option<String>,
    pub qr_data: Option<String>,
    pub location: Option<Location>,
    pub timestamp: Option<Value>,
}

impl ScanSubmission {
    pub fn from_payload(payload: &JsonObject) -> Self {
        Self {
            username: payload.get("username").and_then(any_text),
            qr_data: present_text(payload.get("qr_data")),
            location: payload
                .get("location")
                .filter(|value| is_present(value))
                .and_then(Location::from_value),
            timestamp: payload
                .get("timestamp")
                .filter(|value| is_present(value))
                .cloned(),
        }
    }

    /// Names of the required fields that were not supplied, in request order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.qr_data.is_none() {
            missing.push("qr_data");
        }
        if self.location.is_none() {
            missing.push("location");
        }
        if self.timestamp.is_none() {
            missing.push("timestamp");
        }
        missing
    }
}

/// Null, false, zero, and empty strings/arrays/objects count as "not supplied".
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(members) => !members.is_empty(),
    }
}

pub fn present_text(value: Option<&Value>) -> Option<String> {
    value.filter(|value| is_present(value)).and_then(any_text)
}

/// Non-empty JSON strings only; numbers, booleans and containers count as
/// not supplied.
pub fn present_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) if !text.is_empty() => Some(text.clone()),
        _ => None,
    }
}

fn any_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
