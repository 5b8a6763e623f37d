use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use savin_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct ActivityClient {
    base: Arc<BaseClient>,
}

pub struct LogActivityInput {
    pub activity_type: Option<String>,
    pub details: Option<serde_json::Value>,
}

impl ActivityClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn log(&self, input: LogActivityInput) -> APIResponse<log_activity::APIResponse> {
        let body = log_activity::RequestBody {
            activity_type: input.activity_type,
            details: input.details,
        };
        self.base
            .post(body, "api/log_activity".into(), StatusCode::OK)
            .await
    }

    pub async fn get_log(&self) -> APIResponse<get_activity_log::APIResponse> {
        self.base
            .get("api/get_activity_log".into(), StatusCode::OK)
            .await
    }
}
