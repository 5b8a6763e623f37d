use chrono::{Duration, NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeParseError {
    #[error("`{0}` is not a valid amount of time")]
    InvalidAmount(String),
    #[error("Missing amount or unit in `{0}`")]
    MissingUnit(String),
    #[error("Unsupported time unit: `{0}`")]
    UnsupportedUnit(String),
    #[error("`{0}` is not a valid time of day")]
    InvalidTimeOfDay(String),
    #[error("The resulting time is out of range")]
    OutOfRange,
}

const TOMORROW_AT: &str = "tomorrow at ";
const TODAY_AT: &str = "today at ";

/// Converts a spoken time phrase into a local timestamp relative to `now`.
///
/// Forms are tried in order and the first one that matches wins:
/// - `in <N> minutes` / `in <N> hours`
/// - `tomorrow at <time of day>`
/// - `today at <time of day>`
/// - a bare `<time of day>` on the date of `now`
///
/// See [`parse_time_of_day`] for the accepted times of day.
pub fn parse_time_phrase(
    phrase: &str,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, TimeParseError> {
    let phrase = phrase.trim().to_lowercase();

    let words = phrase.split_whitespace().collect::<Vec<_>>();
    if let Some(pos) = words.iter().position(|w| *w == "in") {
        return parse_relative(&words[pos + 1..], &phrase, now);
    }

    if let Some(idx) = phrase.find(TOMORROW_AT) {
        let tomorrow = now.date() + Duration::days(1);
        return parse_time_of_day(&phrase[idx + TOMORROW_AT.len()..], tomorrow);
    }
    if let Some(idx) = phrase.find(TODAY_AT) {
        return parse_time_of_day(&phrase[idx + TODAY_AT.len()..], now.date());
    }

    parse_time_of_day(&phrase, now.date())
}

fn parse_relative(
    words: &[&str],
    phrase: &str,
    now: NaiveDateTime,
) -> Result<NaiveDateTime, TimeParseError> {
    if words.len() < 2 {
        return Err(TimeParseError::MissingUnit(phrase.to_string()));
    }
    let amount = words[0]
        .parse::<u32>()
        .map_err(|_| TimeParseError::InvalidAmount(words[0].to_string()))?;
    let unit = words[1];

    let offset = if unit.contains("minute") {
        Duration::minutes(i64::from(amount))
    } else if unit.contains("hour") {
        Duration::hours(i64::from(amount))
    } else {
        return Err(TimeParseError::UnsupportedUnit(unit.to_string()));
    };

    now.checked_add_signed(offset)
        .ok_or(TimeParseError::OutOfRange)
}

/// Combines a time of day with `date`.
///
/// Accepts `3pm`, `3:30 pm`, `12am` (midnight), `12pm` (noon) and 24 hour
/// `15:00`. A leading `at` is ignored. Anything else without digits in a
/// recognizable shape defaults to noon.
pub fn parse_time_of_day(text: &str, date: NaiveDate) -> Result<NaiveDateTime, TimeParseError> {
    let text = text.trim().trim_end_matches(|c: char| c == '.' || c == '!' || c == '?');
    let text = text.strip_prefix("at ").unwrap_or(text).trim();

    let (hour, minute) = if text.contains("pm") {
        let (hour, minute) = parse_clock(&text.replace("pm", ""), text)?;
        (to_24_hour(hour, true, text)?, minute)
    } else if text.contains("am") {
        let (hour, minute) = parse_clock(&text.replace("am", ""), text)?;
        (to_24_hour(hour, false, text)?, minute)
    } else if text.contains(':') {
        parse_clock(text, text)?
    } else {
        (12, 0)
    };

    date.and_hms_opt(hour, minute, 0)
        .ok_or_else(|| TimeParseError::InvalidTimeOfDay(text.to_string()))
}

/// Parses `H` or `H:MM`
fn parse_clock(clock: &str, original: &str) -> Result<(u32, u32), TimeParseError> {
    let invalid = || TimeParseError::InvalidTimeOfDay(original.to_string());
    let parts = clock.trim().split(':').collect::<Vec<_>>();
    match parts.as_slice() {
        [hour] => Ok((hour.trim().parse().map_err(|_| invalid())?, 0)),
        [hour, minute] => Ok((
            hour.trim().parse().map_err(|_| invalid())?,
            minute.trim().parse().map_err(|_| invalid())?,
        )),
        _ => Err(invalid()),
    }
}

fn to_24_hour(hour: u32, pm: bool, original: &str) -> Result<u32, TimeParseError> {
    match (hour, pm) {
        (1..=11, true) => Ok(hour + 12),
        (12, true) => Ok(12),
        (12, false) => Ok(0),
        (1..=11, false) => Ok(hour),
        _ => Err(TimeParseError::InvalidTimeOfDay(original.to_string())),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn now() -> NaiveDateTime {
        // Sun Feb 21 2021 10:30:15
        NaiveDate::from_ymd_opt(2021, 2, 21)
            .unwrap()
            .and_hms_opt(10, 30, 15)
            .unwrap()
    }

    fn today_at(h: u32, m: u32) -> NaiveDateTime {
        now().date().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn it_parses_relative_minutes_and_hours() {
        assert_eq!(
            parse_time_phrase("in 5 minutes", now()).unwrap(),
            now() + Duration::minutes(5)
        );
        assert_eq!(
            parse_time_phrase("in 1 minute", now()).unwrap(),
            now() + Duration::minutes(1)
        );
        assert_eq!(
            parse_time_phrase("In 2 Hours", now()).unwrap(),
            now() + Duration::hours(2)
        );
    }

    #[test]
    fn it_rejects_invalid_relative_phrases() {
        assert_eq!(
            parse_time_phrase("in five minutes", now()),
            Err(TimeParseError::InvalidAmount("five".into()))
        );
        assert!(matches!(
            parse_time_phrase("in 5", now()),
            Err(TimeParseError::MissingUnit(_))
        ));
        assert_eq!(
            parse_time_phrase("in 5 days", now()),
            Err(TimeParseError::UnsupportedUnit("days".into()))
        );
    }

    #[test]
    fn it_parses_today_and_tomorrow() {
        assert_eq!(
            parse_time_phrase("today at 3pm", now()).unwrap(),
            today_at(15, 0)
        );
        assert_eq!(
            parse_time_phrase("tomorrow at 9am", now()).unwrap(),
            today_at(9, 0) + Duration::days(1)
        );
        assert_eq!(
            parse_time_phrase("tomorrow at 18:45", now()).unwrap(),
            today_at(18, 45) + Duration::days(1)
        );
    }

    #[test]
    fn it_parses_bare_times_of_day() {
        assert_eq!(parse_time_phrase("15:00", now()).unwrap(), today_at(15, 0));
        assert_eq!(parse_time_phrase("at 5pm", now()).unwrap(), today_at(17, 0));
        assert_eq!(parse_time_phrase("7:15 pm", now()).unwrap(), today_at(19, 15));
    }

    #[test]
    fn it_handles_noon_and_midnight() {
        let date = now().date();
        assert_eq!(parse_time_of_day("12pm", date).unwrap(), today_at(12, 0));
        assert_eq!(parse_time_of_day("12am", date).unwrap(), today_at(0, 0));
    }

    #[test]
    fn it_defaults_unknown_times_of_day_to_noon() {
        assert_eq!(
            parse_time_phrase("whenever you like", now()).unwrap(),
            today_at(12, 0)
        );
    }

    #[test]
    fn it_rejects_malformed_times_of_day() {
        let date = now().date();
        for text in &["13pm", "xpm", "25:00", "10:61", "1:2:3", "ab:cd"] {
            assert!(
                parse_time_of_day(text, date).is_err(),
                "Expected {} to be rejected",
                text
            );
        }
    }
}
