use crate::shared::api::AssistantResponse;
use serde::{Deserialize, Serialize};

pub mod open_app {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub app: String,
    }

    pub type APIResponse = AssistantResponse;
}
