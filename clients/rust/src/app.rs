use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use savin_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppClient {
    base: Arc<BaseClient>,
}

impl AppClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn open<T: Into<String>>(&self, app: T) -> APIResponse<open_app::APIResponse> {
        let body = open_app::RequestBody { app: app.into() };
        self.base
            .post(body, "api/open_app".into(), StatusCode::OK)
            .await
    }
}
