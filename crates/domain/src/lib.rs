mod activity;
mod command;
mod intent;
mod launcher;
mod note;
mod reminder;
mod time_parser;

pub use activity::ActivityLogEntry;
pub use command::{extract_command, CommandRequest, ReminderRequest};
pub use intent::{classify, small_talk_reply, Intent, FAREWELLS, GREETINGS};
pub use launcher::{normalize_app_name, resolve_launch_command, LaunchCommand, OsFamily};
pub use note::{note_created_at, note_file_name, Note};
pub use reminder::{partition_due, resolve_due_at, Reminder, REMINDER_TIME_FORMAT};
pub use time_parser::{parse_time_of_day, parse_time_phrase, TimeParseError};
