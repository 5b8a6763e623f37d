use crate::dtos::ActivityLogEntryDTO;
use serde::{Deserialize, Serialize};

pub mod log_activity {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(rename = "type")]
        pub activity_type: Option<String>,
        pub details: Option<serde_json::Value>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub status: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub message: Option<String>,
    }

    impl APIResponse {
        pub fn success() -> Self {
            Self {
                status: "success".into(),
                message: None,
            }
        }

        pub fn error(message: String) -> Self {
            Self {
                status: "error".into(),
                message: Some(message),
            }
        }
    }
}

pub mod get_activity_log {
    use super::*;

    pub type APIResponse = Vec<ActivityLogEntryDTO>;
}
