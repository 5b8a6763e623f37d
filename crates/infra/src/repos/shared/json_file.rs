use crate::system::ISys;
use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, warn};

/// A JSON document on disk holding an array of records.
///
/// A missing document is empty. A document that cannot be decoded, invalid
/// UTF-8 included, is copied aside to `<name>.corrupt-<timestamp>` and then
/// treated as empty. A document that cannot be read at all is an error, so
/// callers never save over records they did not see. Writes replace the
/// whole document.
pub struct JsonFile {
    path: PathBuf,
    sys: Arc<dyn ISys>,
}

impl JsonFile {
    pub fn new(path: PathBuf, sys: Arc<dyn ISys>) -> Self {
        Self { path, sys }
    }

    pub fn load<T: DeserializeOwned>(&self) -> anyhow::Result<Vec<T>> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", self.path.display()))
            }
        };
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        match serde_json::from_slice(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                error!(
                    "Could not decode {}: {}. Starting with an empty document.",
                    self.path.display(),
                    e
                );
                self.backup_corrupted()?;
                Ok(Vec::new())
            }
        }
    }

    /// Like `load` but read failures are logged and give an empty list
    pub fn load_or_empty<T: DeserializeOwned>(&self) -> Vec<T> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                error!("{:?}", e);
                Vec::new()
            }
        }
    }

    pub fn save<T: Serialize>(&self, records: &[T]) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(records)?;

        // Write next to the document and rename so readers never see a half written file
        let tmp_path = self.sibling("tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }

    fn backup_corrupted(&self) -> anyhow::Result<()> {
        let suffix = format!("corrupt-{}", self.sys.now().format("%Y%m%d-%H%M%S"));
        let backup = self.sibling(&suffix);
        fs::copy(&self.path, &backup).with_context(|| {
            format!(
                "Failed to back up the corrupted document {}",
                self.path.display()
            )
        })?;
        warn!("Kept a copy of the corrupted document at {}", backup.display());
        Ok(())
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".{}", suffix));
        self.path.with_file_name(name)
    }
}
