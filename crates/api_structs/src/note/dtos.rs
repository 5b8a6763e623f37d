use savin_domain::Note;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NoteDTO {
    pub file_name: String,
    pub content: String,
}

impl NoteDTO {
    pub fn new(note: Note) -> Self {
        Self {
            file_name: note.file_name,
            content: note.content,
        }
    }
}
