use super::INoteRepo;
use anyhow::Context;
use savin_domain::{note_created_at, Note};
use std::fs;
use std::path::PathBuf;
use tracing::{error, info};

/// Notes stored as plain text files in one directory
pub struct FsNoteRepo {
    dir: PathBuf,
}

impl FsNoteRepo {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    fn ensure_dir(&self) -> anyhow::Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)
                .with_context(|| format!("Failed to create {}", self.dir.display()))?;
            info!("Created notes directory: {}", self.dir.display());
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl INoteRepo for FsNoteRepo {
    async fn insert(&self, note: &Note) -> anyhow::Result<PathBuf> {
        self.ensure_dir()?;
        let path = self.dir.join(&note.file_name);
        fs::write(&path, &note.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    async fn find_recent(&self, limit: usize) -> anyhow::Result<Vec<Note>> {
        self.ensure_dir()?;
        let mut notes = fs::read_dir(&self.dir)?
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let file_name = entry.file_name().to_string_lossy().to_string();
                note_created_at(&file_name).map(|created| (created, file_name))
            })
            .collect::<Vec<_>>();
        notes.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(notes
            .into_iter()
            .take(limit)
            .map(|(_, file_name)| {
                let content = match fs::read_to_string(self.dir.join(&file_name)) {
                    Ok(content) => content,
                    Err(e) => {
                        error!("Error reading note {}: {:?}", file_name, e);
                        String::new()
                    }
                };
                Note { file_name, content }
            })
            .collect())
    }
}
