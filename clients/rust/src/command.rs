use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use savin_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct CommandClient {
    base: Arc<BaseClient>,
}

impl CommandClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Runs a spoken command, carrying out actions like opening apps
    pub async fn process<T: Into<String>>(
        &self,
        query: T,
    ) -> APIResponse<process_command::APIResponse> {
        let body = process_command::RequestBody {
            query: query.into(),
        };
        self.base
            .post(body, "api/process_command".into(), StatusCode::OK)
            .await
    }

    /// Asks the conversational fallback only
    pub async fn simple_response<T: Into<String>>(
        &self,
        query: T,
    ) -> APIResponse<simple_response::APIResponse> {
        let body = simple_response::RequestBody {
            query: query.into(),
        };
        self.base
            .post(body, "api/simple_response".into(), StatusCode::OK)
            .await
    }
}
