use super::IActivityRepo;
use crate::repos::shared::json_file::JsonFile;
use crate::system::ISys;
use anyhow::anyhow;
use savin_domain::ActivityLogEntry;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Append-only activity log stored as a JSON array on disk
pub struct JsonActivityRepo {
    file: Mutex<JsonFile>,
}

impl JsonActivityRepo {
    pub fn new(path: PathBuf, sys: Arc<dyn ISys>) -> Self {
        Self {
            file: Mutex::new(JsonFile::new(path, sys)),
        }
    }
}

#[async_trait::async_trait]
impl IActivityRepo for JsonActivityRepo {
    async fn insert(&self, entry: &ActivityLogEntry) -> anyhow::Result<()> {
        let file = self
            .file
            .lock()
            .map_err(|_| anyhow!("The activity log lock is poisoned"))?;
        let mut entries = file.load::<ActivityLogEntry>()?;
        entries.push(entry.clone());
        file.save(&entries)
    }

    async fn find_all(&self) -> Vec<ActivityLogEntry> {
        match self.file.lock() {
            Ok(file) => file.load_or_empty(),
            Err(_) => Vec::new(),
        }
    }
}
