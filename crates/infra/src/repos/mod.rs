mod activity;
mod note;
mod reminder;
mod shared;

use crate::config::Config;
use crate::system::ISys;
pub use activity::{IActivityRepo, InMemoryActivityRepo, JsonActivityRepo};
pub use note::{FsNoteRepo, INoteRepo, InMemoryNoteRepo};
pub use reminder::{IReminderRepo, InMemoryReminderRepo, JsonReminderRepo};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct Repos {
    pub reminder_repo: Arc<dyn IReminderRepo>,
    pub activity_repo: Arc<dyn IActivityRepo>,
    pub note_repo: Arc<dyn INoteRepo>,
}

impl Repos {
    /// Repositories backed by files under the configured directories
    pub fn create_local(config: &Config, sys: Arc<dyn ISys>) -> Self {
        info!("Reminders are stored in {}", config.reminders_file().display());
        Self {
            reminder_repo: Arc::new(JsonReminderRepo::new(
                config.reminders_file(),
                sys.clone(),
            )),
            activity_repo: Arc::new(JsonActivityRepo::new(config.activity_log_file(), sys)),
            note_repo: Arc::new(FsNoteRepo::new(config.notes_dir.clone())),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            reminder_repo: Arc::new(InMemoryReminderRepo::new()),
            activity_repo: Arc::new(InMemoryActivityRepo::new()),
            note_repo: Arc::new(InMemoryNoteRepo::new()),
        }
    }
}
