use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Wire and storage format of `Reminder::due_at`
pub const REMINDER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A `Reminder` is a message the user wants to be notified about
/// at a given local wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// The local time at which the user should be notified.
    /// Always stored with second precision.
    #[serde(rename = "time", with = "reminder_time")]
    pub due_at: NaiveDateTime,
    /// What the user wants to be reminded about
    pub message: String,
}

impl Reminder {
    pub fn new(due_at: NaiveDateTime, message: impl Into<String>) -> Self {
        Self {
            due_at: truncate_to_seconds(due_at),
            message: message.into(),
        }
    }

    /// A reminder is due when its time is at or before `now`
    pub fn is_due(&self, now: NaiveDateTime) -> bool {
        self.due_at <= now
    }
}

fn truncate_to_seconds(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_nanosecond(0).unwrap_or(dt)
}

/// Reminders are never stored in the past. A parsed time earlier than `now`
/// is moved forward by one day.
pub fn resolve_due_at(parsed: NaiveDateTime, now: NaiveDateTime) -> NaiveDateTime {
    if parsed < now {
        parsed + Duration::days(1)
    } else {
        parsed
    }
}

/// Splits the reminders into `(due, pending)` keeping the original order
/// within each group.
pub fn partition_due(
    reminders: Vec<Reminder>,
    now: NaiveDateTime,
) -> (Vec<Reminder>, Vec<Reminder>) {
    reminders.into_iter().partition(|r| r.is_due(now))
}

mod reminder_time {
    use super::REMINDER_TIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(REMINDER_TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, REMINDER_TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 2, 21)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn past_time_is_moved_to_next_day() {
        let now = at(16, 0, 0);
        let parsed = at(15, 0, 0);
        assert_eq!(resolve_due_at(parsed, now), parsed + Duration::days(1));
    }

    #[test]
    fn present_and_future_times_are_kept() {
        let now = at(16, 0, 0);
        assert_eq!(resolve_due_at(now, now), now);
        assert_eq!(resolve_due_at(at(17, 0, 0), now), at(17, 0, 0));
    }

    #[test]
    fn partitions_due_reminders() {
        let now = at(12, 0, 0);
        let reminders = vec![
            Reminder::new(at(11, 59, 0), "past"),
            Reminder::new(at(12, 0, 1), "future"),
            Reminder::new(now, "now"),
        ];
        let (due, pending) = partition_due(reminders, now);
        assert_eq!(
            due.iter().map(|r| r.message.as_str()).collect::<Vec<_>>(),
            vec!["past", "now"]
        );
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].message, "future");
    }

    #[test]
    fn serializes_with_time_key() {
        let reminder = Reminder::new(at(15, 4, 5), "call mom");
        let json = serde_json::to_value(&reminder).unwrap();
        assert_eq!(json["time"], "2021-02-21 15:04:05");
        assert_eq!(json["message"], "call mom");

        let parsed: Reminder = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, reminder);
    }

    #[test]
    fn drops_sub_second_precision() {
        let due = at(10, 0, 0) + Duration::milliseconds(1500);
        assert_eq!(Reminder::new(due, "x").due_at, at(10, 0, 1));
    }
}
