use savin_domain::ActivityLogEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ActivityLogEntryDTO {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub details: serde_json::Value,
}

impl ActivityLogEntryDTO {
    pub fn new(entry: ActivityLogEntry) -> Self {
        Self {
            timestamp: entry.timestamp.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
            activity_type: entry.activity_type,
            details: entry.details,
        }
    }
}
