use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use savin_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct StatusClient {
    base: Arc<BaseClient>,
}

impl StatusClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn check(&self) -> APIResponse<get_service_status::APIResponse> {
        self.base.get("api/status".into(), StatusCode::OK).await
    }

    /// The page served at the root
    pub async fn index_page(&self) -> APIResponse<String> {
        self.base.get_text("".into()).await
    }
}
