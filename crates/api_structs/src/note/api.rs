use crate::dtos::NoteDTO;
use crate::shared::api::AssistantResponse;
use serde::{Deserialize, Serialize};

pub mod create_note {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub text: String,
    }

    pub type APIResponse = AssistantResponse;
}

pub mod get_notes {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        pub limit: Option<usize>,
    }

    pub type APIResponse = Vec<NoteDTO>;
}
