use serde::{Deserialize, Serialize};

pub mod get_service_status {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub status: String,
        /// One of `running`, `error` or `disabled`
        pub ollama_status: String,
        pub time: String,
    }
}
