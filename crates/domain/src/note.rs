use chrono::NaiveDateTime;

pub const NOTE_FILE_PREFIX: &str = "note_";
pub const NOTE_FILE_EXTENSION: &str = ".txt";
const NOTE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// A written note. Notes are write-once, the creation time is encoded in
/// the file name.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub file_name: String,
    pub content: String,
}

/// File name for a note created at `created`. Two notes created within the
/// same second share the name.
pub fn note_file_name(created: NaiveDateTime) -> String {
    format!(
        "{}{}{}",
        NOTE_FILE_PREFIX,
        created.format(NOTE_TIMESTAMP_FORMAT),
        NOTE_FILE_EXTENSION
    )
}

/// Reads the creation time back out of a note file name
pub fn note_created_at(file_name: &str) -> Option<NaiveDateTime> {
    let ts = file_name
        .strip_prefix(NOTE_FILE_PREFIX)?
        .strip_suffix(NOTE_FILE_EXTENSION)?;
    NaiveDateTime::parse_from_str(ts, NOTE_TIMESTAMP_FORMAT).ok()
}
