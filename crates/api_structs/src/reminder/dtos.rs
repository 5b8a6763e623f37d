use savin_domain::{Reminder, REMINDER_TIME_FORMAT};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReminderDTO {
    pub time: String,
    pub message: String,
}

impl ReminderDTO {
    pub fn new(reminder: Reminder) -> Self {
        Self {
            time: reminder.due_at.format(REMINDER_TIME_FORMAT).to_string(),
            message: reminder.message,
        }
    }
}
