use std::fmt::Display;

use chrono::Weekday;
use serde::Serialize;

/// One of the eight keys a schedule is stored under.
///
/// The seven weekdays form a cycle (Monday = 0 ... Sunday = 6) used for range
/// expansion. `PublicHoliday` sits outside that cycle and only shows up when the
/// source text names it explicitly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CanonicalDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
    #[serde(rename = "Public Holiday")]
    PublicHoliday,
}

impl CanonicalDay {
    pub const WEEK: [CanonicalDay; 7] = [
        CanonicalDay::Monday,
        CanonicalDay::Tuesday,
        CanonicalDay::Wednesday,
        CanonicalDay::Thursday,
        CanonicalDay::Friday,
        CanonicalDay::Saturday,
        CanonicalDay::Sunday,
    ];

    pub const ALL: [CanonicalDay; 8] = [
        CanonicalDay::Monday,
        CanonicalDay::Tuesday,
        CanonicalDay::Wednesday,
        CanonicalDay::Thursday,
        CanonicalDay::Friday,
        CanonicalDay::Saturday,
        CanonicalDay::Sunday,
        CanonicalDay::PublicHoliday,
    ];

    /// Slot of this day in a per-day table. Weekdays are 0..=6, the holiday is 7.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_weekday(self) -> bool {
        self != CanonicalDay::PublicHoliday
    }

    pub fn label(self) -> &'static str {
        match self {
            CanonicalDay::Monday => "Monday",
            CanonicalDay::Tuesday => "Tuesday",
            CanonicalDay::Wednesday => "Wednesday",
            CanonicalDay::Thursday => "Thursday",
            CanonicalDay::Friday => "Friday",
            CanonicalDay::Saturday => "Saturday",
            CanonicalDay::Sunday => "Sunday",
            CanonicalDay::PublicHoliday => "Public Holiday",
        }
    }

    /// Normalizes a single day token such as "Thurs", "tue," or "Public Holidays".
    ///
    /// Returns `None` when the token is not a day at all.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().trim_end_matches(',').trim().to_lowercase();
        let words: Vec<&str> = token.split_whitespace().collect();
        match words.as_slice() {
            ["public", "holiday" | "holidays"] | ["ph"] => {
                return Some(CanonicalDay::PublicHoliday)
            }
            [_] => (),
            _ => return None,
        }
        // "Thursday" -> "thurs", "Sunday" -> "sun", "Thurday" -> "thur"
        let stem = match token.strip_suffix("day") {
            Some(stem) if !stem.is_empty() => stem,
            _ => token.as_str(),
        };
        match stem {
            "mon" => Some(CanonicalDay::Monday),
            "tue" | "tues" => Some(CanonicalDay::Tuesday),
            "wed" | "wednes" => Some(CanonicalDay::Wednesday),
            "thu" | "thur" | "thurs" => Some(CanonicalDay::Thursday),
            "fri" => Some(CanonicalDay::Friday),
            "sat" | "satur" => Some(CanonicalDay::Saturday),
            "sun" => Some(CanonicalDay::Sunday),
            _ => None,
        }
    }

    /// Walks the Monday -> Sunday cycle from `self` to `end`, both inclusive.
    ///
    /// Wraps past Sunday when `end` comes earlier in the week than `self`.
    /// Returns an empty list if either end is the public holiday.
    pub fn range_to(self, end: CanonicalDay) -> Vec<CanonicalDay> {
        if !self.is_weekday() || !end.is_weekday() {
            return Vec::new();
        }
        let start = self.index();
        let span = (end.index() + 7 - start) % 7;
        (0..=span).map(|offset| Self::WEEK[(start + offset) % 7]).collect()
    }
}

impl Display for CanonicalDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Weekday> for CanonicalDay {
    fn from(weekday: Weekday) -> Self {
        Self::WEEK[weekday.num_days_from_monday() as usize]
    }
}
