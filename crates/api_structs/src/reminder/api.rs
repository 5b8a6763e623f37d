use crate::dtos::ReminderDTO;
use crate::shared::api::AssistantResponse;
use serde::{Deserialize, Serialize};

pub mod create_reminder {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        /// When to remind, e.g. "tomorrow at 3pm" or "in 5 minutes"
        pub time: String,
        pub message: String,
    }

    pub type APIResponse = AssistantResponse;
}

pub mod get_reminders {
    use super::*;

    pub type APIResponse = Vec<ReminderDTO>;
}
