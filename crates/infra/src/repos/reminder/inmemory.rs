use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDateTime;
use savin_domain::Reminder;

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()> {
        insert(reminder, &self.reminders);
        Ok(())
    }

    async fn find_all(&self) -> Vec<Reminder> {
        find_all(&self.reminders)
    }

    async fn save_all(&self, reminders: &[Reminder]) -> anyhow::Result<()> {
        replace_all(reminders, &self.reminders);
        Ok(())
    }

    async fn delete_all_before(&self, now: NaiveDateTime) -> anyhow::Result<Vec<Reminder>> {
        Ok(find_and_delete_by(&self.reminders, |r| r.is_due(now)))
    }
}
