use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Something the user did in the web page, stored in the activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogEntry {
    pub timestamp: NaiveDateTime,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub details: serde_json::Value,
}

impl ActivityLogEntry {
    pub fn new(timestamp: NaiveDateTime, activity_type: String, details: serde_json::Value) -> Self {
        Self {
            timestamp,
            activity_type,
            details,
        }
    }
}
