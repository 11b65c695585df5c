use backend_domain::{is_present, JsonObject};
use serde_json::Value;

/// Decodes a request body as a non-empty JSON object.
///
/// An empty body, invalid JSON, a non-object, or `{}` all yield `None`;
/// callers report those uniformly as a missing body.
pub fn json_object(body: &[u8]) -> Option<JsonObject> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }
    let value: Value = serde_json::from_slice(body).ok()?;
    if !is_present(&value) {
        return None;
    }
    match value {
        Value::Object(object) => Some(object),
        _ => None,
    }
}
