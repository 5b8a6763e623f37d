//! Pulls the arguments of an action out of a spoken command, e.g. the app
//! name of "open spotify" or the time and message of "remind me to stretch
//! in 10 minutes".

use crate::time_parser::parse_time_phrase;
use chrono::NaiveDateTime;

const REMINDER_TRIGGERS: &[&str] = &["remind me", "reminder"];
const REMINDER_FILLERS: &[&str] = &[
    "set a reminder",
    "create a reminder",
    "remind me",
    "reminder",
];
const TIME_MARKERS: &[&str] = &[" tomorrow at ", " today at ", " in ", " at "];
const NOTE_TRIGGERS: &[&str] = &["note", "write"];
const NOTE_PREFIXES: &[&str] = &[
    "take a note",
    "make a note",
    "write a note",
    "write this down",
    "write down",
    "note",
    "write",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderRequest {
    pub time_phrase: String,
    pub message: String,
}

/// An action found in a spoken command. The payload is `None` when the
/// action was recognized but its arguments are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRequest {
    OpenApp(Option<String>),
    SetReminder(Option<ReminderRequest>),
    TakeNote(Option<String>),
}

/// Looks for an action in `text`. Opening apps is checked first, then
/// reminders and last notes.
pub fn extract_command(text: &str) -> Option<CommandRequest> {
    let text = text.trim();
    // ASCII lowercasing keeps byte offsets valid for slicing `text`
    let lower = text.to_ascii_lowercase();

    if let Some(idx) = lower.find("open") {
        return Some(CommandRequest::OpenApp(app_name_after(&lower[idx + 4..])));
    }
    if REMINDER_TRIGGERS.iter().any(|t| lower.contains(t)) {
        return Some(CommandRequest::SetReminder(split_reminder_request(&lower)));
    }
    if NOTE_TRIGGERS.iter().any(|t| lower.contains(t)) {
        return Some(CommandRequest::TakeNote(note_text(text, &lower)));
    }
    None
}

fn app_name_after(rest: &str) -> Option<String> {
    let name = rest.trim();
    let name = name.strip_prefix("the ").unwrap_or(name);
    let name = name
        .trim_end_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .trim();
    non_empty(name)
}

/// Splits at the right-most time marker whose time phrase names a clock time
/// or an amount, so words like "in" inside the message do not end up in the
/// time phrase. A trailing
/// "to ..." after the time belongs to the message.
fn split_reminder_request(lower: &str) -> Option<ReminderRequest> {
    let padded = format!(" {}", lower);
    let mut starts = TIME_MARKERS
        .iter()
        .flat_map(|marker| padded.match_indices(marker))
        .filter(|(idx, marker)| !(*marker == " at " && is_day_marker_end(&padded[..*idx])))
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();
    starts.sort_unstable_by(|a, b| b.cmp(a));

    // When nothing parses the right-most split is kept and fails later on
    let rightmost = *starts.first()?;
    let (time_phrase, message) = starts
        .iter()
        .map(|start| split_at(&padded, *start))
        .find(|(time_phrase, _)| {
            time_phrase.contains(|c: char| c.is_ascii_digit())
                && parse_time_phrase(time_phrase, NaiveDateTime::default()).is_ok()
        })
        .unwrap_or_else(|| split_at(&padded, rightmost));

    let time_phrase = non_empty(time_phrase.trim())?;
    let message = non_empty(&message)?;
    Some(ReminderRequest {
        time_phrase,
        message,
    })
}

/// `(time phrase, message)` for a time starting at byte `start`
fn split_at(padded: &str, start: usize) -> (String, String) {
    let mut time_phrase = padded[start..].trim().to_string();
    let mut message = strip_reminder_fillers(&padded[..start]);

    if let Some(to_idx) = time_phrase.find(" to ") {
        let trailing = strip_reminder_fillers(&time_phrase[to_idx..]);
        if message.is_empty() {
            message = trailing;
        } else if !trailing.is_empty() {
            message = format!("{} {}", message, trailing);
        }
        time_phrase.truncate(to_idx);
    }
    (time_phrase, message)
}

fn is_day_marker_end(before: &str) -> bool {
    before.ends_with(" tomorrow") || before.ends_with(" today")
}

fn strip_reminder_fillers(text: &str) -> String {
    let mut text = text.to_string();
    for filler in REMINDER_FILLERS {
        text = text.replace(filler, " ");
    }
    let text = text.trim();
    let text = text
        .strip_prefix("to ")
        .or_else(|| text.strip_prefix("about "))
        .unwrap_or(text);
    text.trim_matches(|c: char| c.is_ascii_punctuation() || c.is_whitespace())
        .to_string()
}

fn note_text(text: &str, lower: &str) -> Option<String> {
    let (idx, prefix) = NOTE_PREFIXES
        .iter()
        .find_map(|prefix| lower.find(prefix).map(|idx| (idx, prefix)))?;
    let rest = text[idx + prefix.len()..]
        .trim_start_matches(|c: char| c == ':' || c == ',' || c.is_whitespace());
    let rest = if rest.to_ascii_lowercase().starts_with("that ") {
        &rest[5..]
    } else {
        rest
    };
    non_empty(rest.trim())
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(time_phrase: &str, message: &str) -> Option<CommandRequest> {
        Some(CommandRequest::SetReminder(Some(ReminderRequest {
            time_phrase: time_phrase.into(),
            message: message.into(),
        })))
    }

    #[test]
    fn extracts_app_names() {
        assert_eq!(
            extract_command("Open Calculator"),
            Some(CommandRequest::OpenApp(Some("calculator".into())))
        );
        assert_eq!(
            extract_command("please open the file explorer."),
            Some(CommandRequest::OpenApp(Some("file explorer".into())))
        );
        assert_eq!(
            extract_command("open"),
            Some(CommandRequest::OpenApp(None))
        );
    }

    #[test]
    fn splits_reminders_into_time_and_message() {
        assert_eq!(
            extract_command("Remind me to call mom at 5pm"),
            reminder("at 5pm", "call mom")
        );
        assert_eq!(
            extract_command("remind me to stretch in 10 minutes"),
            reminder("in 10 minutes", "stretch")
        );
        assert_eq!(
            extract_command("set a reminder to put the milk in the fridge tomorrow at 9am"),
            reminder("tomorrow at 9am", "put the milk in the fridge")
        );
        assert_eq!(
            extract_command("remind me today at 3pm to water the plants"),
            reminder("today at 3pm", "water the plants")
        );
    }

    #[test]
    fn markers_inside_a_trailing_message_are_skipped() {
        assert_eq!(
            extract_command("remind me at 5pm to log in to the portal"),
            reminder("at 5pm", "log in to the portal")
        );
        assert_eq!(
            extract_command("remind me in 10 minutes to check in at the desk"),
            reminder("in 10 minutes", "check in at the desk")
        );
    }

    #[test]
    fn reminders_without_details_have_no_payload() {
        assert_eq!(
            extract_command("set a reminder"),
            Some(CommandRequest::SetReminder(None))
        );
        assert_eq!(
            extract_command("remind me in 5 minutes"),
            Some(CommandRequest::SetReminder(None))
        );
    }

    #[test]
    fn extracts_note_text_keeping_case() {
        assert_eq!(
            extract_command("Take a note: Buy Milk"),
            Some(CommandRequest::TakeNote(Some("Buy Milk".into())))
        );
        assert_eq!(
            extract_command("write down that the meeting moved"),
            Some(CommandRequest::TakeNote(Some("the meeting moved".into())))
        );
        assert_eq!(
            extract_command("write a note"),
            Some(CommandRequest::TakeNote(None))
        );
    }

    #[test]
    fn other_text_has_no_command() {
        assert_eq!(extract_command("hello, what time is it?"), None);
    }
}
