use super::IReminderRepo;
use crate::repos::shared::json_file::JsonFile;
use crate::system::ISys;
use anyhow::anyhow;
use chrono::NaiveDateTime;
use savin_domain::{partition_due, Reminder};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

/// Reminders stored as a JSON array on disk. The lock serializes every
/// load-modify-save cycle between request handlers and the scheduler.
pub struct JsonReminderRepo {
    file: Mutex<JsonFile>,
}

impl JsonReminderRepo {
    pub fn new(path: PathBuf, sys: Arc<dyn ISys>) -> Self {
        Self {
            file: Mutex::new(JsonFile::new(path, sys)),
        }
    }

    fn lock(&self) -> anyhow::Result<MutexGuard<'_, JsonFile>> {
        self.file
            .lock()
            .map_err(|_| anyhow!("The reminders store lock is poisoned"))
    }
}

#[async_trait::async_trait]
impl IReminderRepo for JsonReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        let file = self.lock()?;
        let mut reminders = file.load::<Reminder>()?;
        reminders.push(reminder.clone());
        file.save(&reminders)
    }

    async fn find_all(&self) -> Vec<Reminder> {
        match self.lock() {
            Ok(file) => file.load_or_empty(),
            Err(_) => Vec::new(),
        }
    }

    async fn save_all(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        self.lock()?.save(reminders)
    }

    async fn delete_all_before(&self, now: NaiveDateTime) -> anyhow::Result<Vec<Reminder>> {
        let file = self.lock()?;
        let (due, pending) = partition_due(file.load()?, now);
        if !due.is_empty() {
            file.save(&pending)?;
        }
        Ok(due)
    }
}
