mod activity;
mod app;
mod base;
mod command;
mod note;
mod reminder;
mod status;

use activity::ActivityClient;
pub use activity::LogActivityInput;
use app::AppClient;
pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use command::CommandClient;
use note::NoteClient;
use reminder::ReminderClient;
pub use reminder::CreateReminderInput;
use status::StatusClient;
use std::sync::Arc;

pub use savin_api_structs::AssistantResponse;

// Domain
pub use savin_api_structs::dtos::ActivityLogEntryDTO as ActivityLogEntry;
pub use savin_api_structs::dtos::NoteDTO as Note;
pub use savin_api_structs::dtos::ReminderDTO as Reminder;

/// Savin SDK
///
/// The SDK contains methods for interacting with a running Savin assistant
/// over its HTTP API.
#[derive(Clone)]
pub struct SavinSDK {
    pub activity: ActivityClient,
    pub app: AppClient,
    pub command: CommandClient,
    pub note: NoteClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
}

impl SavinSDK {
    /// `address` is the server root, e.g. `http://localhost:5000`
    pub fn new<T: Into<String>>(address: T) -> Self {
        let base = Arc::new(BaseClient::new(address.into()));
        let activity = ActivityClient::new(base.clone());
        let app = AppClient::new(base.clone());
        let command = CommandClient::new(base.clone());
        let note = NoteClient::new(base.clone());
        let reminder = ReminderClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            activity,
            app,
            command,
            note,
            reminder,
            status,
        }
    }
}
