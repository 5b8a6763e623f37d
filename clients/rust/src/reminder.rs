use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use savin_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReminderClient {
    base: Arc<BaseClient>,
}

pub struct CreateReminderInput {
    /// e.g. "tomorrow at 9am" or "in 10 minutes"
    pub time: String,
    pub message: String,
}

impl ReminderClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create(
        &self,
        input: CreateReminderInput,
    ) -> APIResponse<create_reminder::APIResponse> {
        let body = create_reminder::RequestBody {
            time: input.time,
            message: input.message,
        };
        self.base
            .post(body, "api/reminders".into(), StatusCode::OK)
            .await
    }

    pub async fn get(&self) -> APIResponse<get_reminders::APIResponse> {
        self.base.get("api/reminders".into(), StatusCode::OK).await
    }
}
