use crate::shared::api::AssistantResponse;
use serde::{Deserialize, Serialize};

pub mod process_command {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub query: String,
    }

    pub type APIResponse = AssistantResponse;
}

pub mod simple_response {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub query: String,
    }

    pub type APIResponse = AssistantResponse;
}
