use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;
use serde::Serializer;

pub const TIME_FORMAT: &str = "%H:%M:%S";

// "9:00 AM", "9:00PM", "10am", "9 a.m."
static TWELVE_HOUR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,2})(?::(\d{2}))?\s*([ap])\.?\s*m\.?$").unwrap()
});
// "0800", "2200"
static FOUR_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{2})(\d{2})$").unwrap());
// "22:00", "9.30"
static TWENTY_FOUR_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2})[:.](\d{2})$").unwrap());

/// Turns a time token into a 24 hour time of day.
///
/// Accepted notations, tried in order:
/// - 12 hour with minutes and AM/PM, space optional: "9:00 AM", "9:00PM"
/// - bare hour with AM/PM: "10am", "6 pm"
/// - 4 digit 24 hour: "0800"
/// - 24 hour with a colon: "22:00"
///
/// 12 AM is midnight and 12 PM is noon. Anything else returns `None`, which
/// callers store as an unknown time rather than an error.
pub fn parse_time(token: &str) -> Option<NaiveTime> {
    let token = token.trim();
    if let Some(captures) = TWELVE_HOUR.captures(token) {
        let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
        let minute: u32 = match captures.get(2) {
            Some(minute) => minute.as_str().parse().ok()?,
            None => 0,
        };
        if !(1..=12).contains(&hour) {
            return None;
        }
        let pm = captures.get(3)?.as_str().eq_ignore_ascii_case("p");
        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (hour, true) => hour + 12,
            (hour, false) => hour,
        };
        return NaiveTime::from_hms_opt(hour, minute, 0);
    }
    let captures = FOUR_DIGIT
        .captures(token)
        .or_else(|| TWENTY_FOUR_HOUR.captures(token))?;
    let hour: u32 = captures.get(1)?.as_str().parse().ok()?;
    let minute: u32 = captures.get(2)?.as_str().parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Writes an optional time as "HH:MM:SS" or `null`.
pub fn serialize_opt<S: Serializer>(time: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error> {
    match time {
        Some(time) => serializer.collect_str(&time.format(TIME_FORMAT)),
        None => serializer.serialize_none(),
    }
}
