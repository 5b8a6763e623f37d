use crate::base::{APIResponse, BaseClient};
use reqwest::StatusCode;
use savin_api_structs::*;
use std::sync::Arc;

#[derive(Clone)]
pub struct NoteClient {
    base: Arc<BaseClient>,
}

impl NoteClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn create<T: Into<String>>(&self, text: T) -> APIResponse<create_note::APIResponse> {
        let body = create_note::RequestBody { text: text.into() };
        self.base
            .post(body, "api/notes".into(), StatusCode::OK)
            .await
    }

    /// The most recent notes, newest first. The server picks the limit when
    /// none is given.
    pub async fn get_recent(&self, limit: Option<usize>) -> APIResponse<get_notes::APIResponse> {
        let path = match limit {
            Some(limit) => format!("api/notes?limit={}", limit),
            None => "api/notes".to_string(),
        };
        self.base.get(path, StatusCode::OK).await
    }
}
