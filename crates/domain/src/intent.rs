use chrono::NaiveDateTime;
use rand::seq::SliceRandom;

const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "greetings"];
const FAREWELL_WORDS: &[&str] = &["bye", "goodbye", "farewell"];
const FAREWELL_PHRASES: &[&str] = &["see you"];
const IDENTITY_PHRASES: &[&str] = &["who are you", "your name"];
const CAPABILITY_PHRASES: &[&str] = &["what can you do", "help me", "your capabilities"];
const REMINDER_PHRASES: &[&str] = &["set a reminder", "remind me", "create a reminder"];
const NOTE_PHRASES: &[&str] = &["take a note", "write this down", "make a note", "write a note"];

pub const GREETINGS: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! I'm Savin, ready to assist you.",
    "Greetings! What can I do for you?",
    "Hello! I'm here to help. What do you need?",
];

pub const FAREWELLS: &[&str] = &[
    "Goodbye! Have a great day!",
    "See you later! Take care!",
    "Bye for now! Let me know if you need anything else.",
    "Farewell! I'll be here when you need me.",
];

pub const WEATHER_REPLY: &str =
    "I don't have access to real-time weather data right now, but I can help you with other things.";
pub const IDENTITY_REPLY: &str = "I'm Savin, your personal AI assistant. I can help you with opening apps, setting reminders, taking notes, and having conversations.";
pub const CAPABILITIES_REPLY: &str = "I can open applications for you, set reminders, take notes, tell you the time and date, and have a friendly conversation. Just tell me what you need!";
pub const OPEN_APP_REPLY: &str = "I'll open that for you right away.";
pub const SET_REMINDER_REPLY: &str =
    "I'd be happy to set a reminder for you. What would you like me to remind you about?";
pub const TAKE_NOTE_REPLY: &str =
    "I'll take a note for you. What would you like me to write down?";

/// What the user asked for, as decided by keyword matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Farewell,
    Time,
    Date,
    Weather,
    Identity,
    Capabilities,
    OpenApp,
    SetReminder,
    TakeNote,
    /// Nothing matched, the text should be answered conversationally
    Chat,
}

/// Classifies free text. Checks run in a fixed order and the first match
/// wins, so "hello, what time is it?" is a `Greeting`.
pub fn classify(text: &str) -> Intent {
    let text = text.trim().to_lowercase();

    if contains_any_word(&text, GREETING_WORDS) {
        Intent::Greeting
    } else if contains_any_word(&text, FAREWELL_WORDS) || contains_any(&text, FAREWELL_PHRASES) {
        Intent::Farewell
    } else if text.contains("time") {
        Intent::Time
    } else if text.contains("date") || text.contains("day") {
        Intent::Date
    } else if text.contains("weather") {
        Intent::Weather
    } else if contains_any(&text, IDENTITY_PHRASES) {
        Intent::Identity
    } else if contains_any(&text, CAPABILITY_PHRASES) {
        Intent::Capabilities
    } else if text.contains("open") {
        Intent::OpenApp
    } else if contains_any(&text, REMINDER_PHRASES) {
        Intent::SetReminder
    } else if contains_any(&text, NOTE_PHRASES) {
        Intent::TakeNote
    } else {
        Intent::Chat
    }
}

impl Intent {
    /// The fixed reply for this intent. `Chat` has none and must be
    /// answered by the conversational fallback.
    pub fn canned_reply(&self, now: NaiveDateTime) -> Option<String> {
        let reply = match self {
            Intent::Greeting => pick(GREETINGS).to_string(),
            Intent::Farewell => pick(FAREWELLS).to_string(),
            Intent::Time => format!("The current time is {}.", now.format("%I:%M %p")),
            Intent::Date => format!("Today is {}.", now.format("%A, %B %d, %Y")),
            Intent::Weather => WEATHER_REPLY.to_string(),
            Intent::Identity => IDENTITY_REPLY.to_string(),
            Intent::Capabilities => CAPABILITIES_REPLY.to_string(),
            Intent::OpenApp => OPEN_APP_REPLY.to_string(),
            Intent::SetReminder => SET_REMINDER_REPLY.to_string(),
            Intent::TakeNote => TAKE_NOTE_REPLY.to_string(),
            Intent::Chat => return None,
        };
        Some(reply)
    }
}

/// Rule based replies used when the language model is not available
pub fn small_talk_reply(text: &str) -> String {
    let text = text.to_lowercase();
    if contains_any(&text, &["how are you", "how's it going", "how do you do"]) {
        "I'm doing well, thank you for asking! How can I help you today?".into()
    } else if contains_any(&text, &["thanks", "thank you", "appreciate"]) {
        "You're welcome! I'm happy to help.".into()
    } else if contains_any(&text, &["can you", "are you able to"]) {
        "I can help you open applications, set reminders, take notes, and more. Just let me know what you need!".into()
    } else {
        pick(&[
            "I'm not sure how to help with that specific request, but I can open apps, set reminders, or take notes for you.",
            "I didn't quite understand. Could you try rephrasing or ask me to open an app, set a reminder, or take a note?",
            "I'm still learning! I can definitely help you open applications, set reminders, or write notes though.",
            "Let me know if you'd like me to open an application, set a reminder, or take a note for you.",
        ])
        .to_string()
    }
}

fn pick<'a>(replies: &[&'a str]) -> &'a str {
    replies
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| text.contains(p))
}

/// Single words are matched against whole words so that "hi" does not
/// match "this"
fn contains_any_word(text: &str, words: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|token| words.contains(&token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 2, 21)
            .unwrap()
            .and_hms_opt(15, 4, 0)
            .unwrap()
    }

    #[test]
    fn greeting_wins_over_time() {
        assert_eq!(classify("hello, what time is it?"), Intent::Greeting);
        let reply = Intent::Greeting.canned_reply(now()).unwrap();
        assert!(GREETINGS.contains(&reply.as_str()));
    }

    #[test]
    fn classifies_in_fixed_order() {
        let cases = vec![
            ("Hey Savin", Intent::Greeting),
            ("ok bye", Intent::Farewell),
            ("see you tomorrow", Intent::Farewell),
            ("what time is it", Intent::Time),
            ("what's the date", Intent::Date),
            ("which day is it", Intent::Date),
            ("how is the weather", Intent::Weather),
            ("who are you", Intent::Identity),
            ("what can you do", Intent::Capabilities),
            ("open spotify", Intent::OpenApp),
            ("remind me to stretch", Intent::SetReminder),
            ("please make a note", Intent::TakeNote),
            ("tell me a joke", Intent::Chat),
        ];
        for (text, intent) in cases {
            assert_eq!(classify(text), intent, "Unexpected intent for: {}", text);
        }
    }

    #[test]
    fn greeting_words_must_be_whole_words() {
        assert_eq!(classify("this is a test"), Intent::Chat);
        assert_eq!(classify("which weather"), Intent::Weather);
    }

    #[test]
    fn formats_time_and_date_replies() {
        assert_eq!(
            Intent::Time.canned_reply(now()).unwrap(),
            "The current time is 03:04 PM."
        );
        assert_eq!(
            Intent::Date.canned_reply(now()).unwrap(),
            "Today is Sunday, February 21, 2021."
        );
        assert!(Intent::Chat.canned_reply(now()).is_none());
    }

    #[test]
    fn small_talk_has_a_reply_for_everything() {
        assert_eq!(
            small_talk_reply("Thank you!"),
            "You're welcome! I'm happy to help."
        );
        assert!(!small_talk_reply("qwerty").is_empty());
    }
}
