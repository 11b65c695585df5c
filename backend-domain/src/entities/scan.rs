// Scan entity
// One recorded QR-code scan: who, what, where, when

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Location;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanEvent {
    pub username: Option<String>,
    pub qr_data: String,
    pub location: Location,
    pub time: DateTime<Utc>,
}
