use serde::{Deserialize, Serialize};

/// What the assistant says back to the user
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AssistantResponse {
    pub response: String,
}

impl AssistantResponse {
    pub fn new<T: Into<String>>(response: T) -> Self {
        Self {
            response: response.into(),
        }
    }
}
