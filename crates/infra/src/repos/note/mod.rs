mod fs;
mod inmemory;

pub use self::fs::FsNoteRepo;
pub use inmemory::InMemoryNoteRepo;

use savin_domain::Note;
use std::path::PathBuf;

#[async_trait::async_trait]
pub trait INoteRepo: Send + Sync {
    /// Writes the note, replacing any note with the same file name, and
    /// returns where it was stored
    async fn insert(&self, note: &Note) -> anyhow::Result<PathBuf>;
    /// The most recent notes, newest first
    async fn find_recent(&self, limit: usize) -> anyhow::Result<Vec<Note>>;
}
