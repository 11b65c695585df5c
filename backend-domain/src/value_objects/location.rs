// Location value object

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Geographic position reported by the scanning device.
///
/// No range validation is applied; whatever the device sends is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Reads `{lat, lng}` out of a JSON value. Both members must be numbers.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let lat = object.get("lat")?.as_f64()?;
        let lng = object.get("lng")?.as_f64()?;
        Some(Self { lat, lng })
    }
}
