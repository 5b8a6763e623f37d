mod inmemory;
mod json;

pub use inmemory::InMemoryReminderRepo;
pub use json::JsonReminderRepo;

use chrono::NaiveDateTime;
use savin_domain::Reminder;

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Appends one reminder to the store
    async fn insert(&self, reminder: &Reminder) -> anyhow::Result<()>;
    /// All reminders in insertion order. Never fails, unreadable stores are empty.
    async fn find_all(&self) -> Vec<Reminder>;
    /// Replaces the whole store
    async fn save_all(&self, reminders: &[Reminder]) -> anyhow::Result<()>;
    /// Removes every reminder due at `now` and returns them. The pending
    /// ones are written back in the same locked cycle.
    async fn delete_all_before(&self, now: NaiveDateTime) -> anyhow::Result<Vec<Reminder>>;
}
