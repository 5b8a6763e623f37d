use super::IActivityRepo;
use crate::repos::shared::inmemory_repo::*;
use savin_domain::ActivityLogEntry;

pub struct InMemoryActivityRepo {
    entries: std::sync::Mutex<Vec<ActivityLogEntry>>,
}

impl InMemoryActivityRepo {
    pub fn new() -> Self {
        Self {
            entries: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IActivityRepo for InMemoryActivityRepo {
    async fn insert(&self, entry: &ActivityLogEntry) -> anyhow::Result<()> {
        insert(entry, &self.entries);
        Ok(())
    }

    async fn find_all(&self) -> Vec<ActivityLogEntry> {
        find_all(&self.entries)
    }
}
