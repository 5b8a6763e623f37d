use super::INoteRepo;
use savin_domain::{note_created_at, Note};
use std::path::PathBuf;

pub struct InMemoryNoteRepo {
    notes: std::sync::Mutex<Vec<Note>>,
}

impl InMemoryNoteRepo {
    pub fn new() -> Self {
        Self {
            notes: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl INoteRepo for InMemoryNoteRepo {
    async fn insert(&self, note: &Note) -> anyhow::Result<PathBuf> {
        let mut notes = self.notes.lock().unwrap();
        notes.retain(|n| n.file_name != note.file_name);
        notes.push(note.clone());
        Ok(PathBuf::from(&note.file_name))
    }

    async fn find_recent(&self, limit: usize) -> anyhow::Result<Vec<Note>> {
        let mut notes = self.notes.lock().unwrap().clone();
        notes.sort_by_key(|n| std::cmp::Reverse(note_created_at(&n.file_name)));
        notes.truncate(limit);
        Ok(notes)
    }
}
