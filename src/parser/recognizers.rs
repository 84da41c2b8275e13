use chrono::NaiveTime;
use regex::Captures;

use crate::timing::{day::CanonicalDay, time::parse_time};

use super::{
    days::{expand_days, expand_days_strict},
    parser::HoursParser,
};

/// What a recognizer pulled out of a line for a single day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub day: CanonicalDay,
    pub opening: Option<NaiveTime>,
    pub closing: Option<NaiveTime>,
    pub closed: bool,
}

impl Entry {
    fn open(day: CanonicalDay, (opening, closing): TimeRange) -> Self {
        Self {
            day,
            opening,
            closing,
            closed: false,
        }
    }

    fn closed(day: CanonicalDay) -> Self {
        Self {
            day,
            opening: None,
            closing: None,
            closed: true,
        }
    }
}

/// Result of running one recognizer on one line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Matched(Vec<Entry>),
    /// Consumed, but the line sent mixed signals (a closed keyword next to a time range).
    Ambiguous(Vec<Entry>),
    NoMatch,
}

impl Outcome {
    fn from_entries(entries: Vec<Entry>) -> Self {
        if entries.is_empty() {
            Outcome::NoMatch
        } else {
            Outcome::Matched(entries)
        }
    }
}

type TimeRange = (Option<NaiveTime>, Option<NaiveTime>);

pub type Recognizer = fn(&HoursParser, &str) -> Outcome;

/// The recognizer chain in priority order. The first one that does not
/// return `NoMatch` consumes the line.
pub const RECOGNIZERS: [(&str, Recognizer); 9] = [
    ("closed_marker", closed_marker),
    ("day_comma_closed", day_comma_closed),
    ("public_holiday_list", public_holiday_list),
    ("day_list", day_list),
    ("full_week", full_week),
    ("twenty_four_hour_days", twenty_four_hour_days),
    ("day_range", day_range),
    ("single_day", single_day),
    ("fallback", fallback),
];

fn time_range(captures: &Captures) -> TimeRange {
    let time = |name: &str| captures.name(name).and_then(|m| parse_time(m.as_str()));
    (time("open"), time("close"))
}

fn listed_days(captures: Option<Captures>) -> Option<Vec<CanonicalDay>> {
    expand_days_strict(captures?.name("days")?.as_str())
}

fn closed_entries(days: Vec<CanonicalDay>) -> Outcome {
    Outcome::from_entries(days.into_iter().map(Entry::closed).collect())
}

/// "Tuesday: Closed", "Tue : Close", "Monday, Wednesday: Closed"
///
/// When the text before the colon is not a plain day list, the day right in
/// front of the colon is the one closed ("Note, Tuesday: Closed").
pub fn closed_marker(parser: &HoursParser, line: &str) -> Outcome {
    let days = listed_days(parser.closed_list_marker.captures(line)).or_else(|| {
        let day = parser.closed_marker.captures(line)?.name("day")?.as_str();
        CanonicalDay::from_token(day).map(|day| vec![day])
    });
    days.map_or(Outcome::NoMatch, closed_entries)
}

/// "Tuesday, Closed", "Saturday, Sunday, Closed", "Monday, closed for renovation"
///
/// Everything before the comma that precedes the keyword must be days.
pub fn day_comma_closed(parser: &HoursParser, line: &str) -> Outcome {
    listed_days(parser.day_comma_closed.captures(line)).map_or(Outcome::NoMatch, closed_entries)
}

/// "Saturday, Sunday & Public Holiday, 9:00 AM – 9:00 PM"
///
/// Days in the prefix that are not recognized are skipped, but the holiday is
/// always kept.
pub fn public_holiday_list(parser: &HoursParser, line: &str) -> Outcome {
    let Some(captures) = parser.day_list_time.captures(line) else {
        return Outcome::NoMatch;
    };
    let prefix = captures.name("days").map_or("", |m| m.as_str());
    if !parser.public_holiday.is_match(prefix) {
        return Outcome::NoMatch;
    }
    let mut days = expand_days(prefix);
    if !days.contains(&CanonicalDay::PublicHoliday) {
        days.push(CanonicalDay::PublicHoliday);
    }
    let range = time_range(&captures);
    Outcome::from_entries(days.into_iter().map(|day| Entry::open(day, range)).collect())
}

/// "Mon & Wed, 10am - 6pm", "Monday - Thursday & Sunday, 10:00 AM - 10:00 PM"
pub fn day_list(parser: &HoursParser, line: &str) -> Outcome {
    let Some(captures) = parser.day_list_time.captures(line) else {
        return Outcome::NoMatch;
    };
    let prefix = captures.name("days").map_or("", |m| m.as_str());
    if !prefix.contains(['&', ',', '-', '–', '—']) {
        return Outcome::NoMatch;
    }
    let Some(days) = expand_days_strict(prefix) else {
        return Outcome::NoMatch;
    };
    let range = time_range(&captures);
    Outcome::from_entries(days.into_iter().map(|day| Entry::open(day, range)).collect())
}

/// "Monday - Sunday (9:00AM - 10:00PM)", "Mon to Sun 10am to 10pm"
pub fn full_week(parser: &HoursParser, line: &str) -> Outcome {
    let Some(captures) = parser.full_week.captures(line) else {
        return Outcome::NoMatch;
    };
    let range = time_range(&captures);
    Outcome::from_entries(
        CanonicalDay::WEEK
            .into_iter()
            .map(|day| Entry::open(day, range))
            .collect(),
    )
}

/// "0800 - 2200 (Sun - Thur)", "0800 - 2230 (Fri & Sat)"
pub fn twenty_four_hour_days(parser: &HoursParser, line: &str) -> Outcome {
    let Some(captures) = parser.twenty_four_hour_days.captures(line) else {
        return Outcome::NoMatch;
    };
    let days = expand_days(captures.name("days").map_or("", |m| m.as_str()));
    let range = time_range(&captures);
    Outcome::from_entries(days.into_iter().map(|day| Entry::open(day, range)).collect())
}

/// "Monday - Saturday, 8:00 AM – 9:00PM"
pub fn day_range(parser: &HoursParser, line: &str) -> Outcome {
    let Some(captures) = parser.day_range_time.captures(line) else {
        return Outcome::NoMatch;
    };
    let (Some(start), Some(end)) = (
        captures.name("start").and_then(|m| CanonicalDay::from_token(m.as_str())),
        captures.name("end").and_then(|m| CanonicalDay::from_token(m.as_str())),
    ) else {
        return Outcome::NoMatch;
    };
    let range = time_range(&captures);
    Outcome::from_entries(
        start
            .range_to(end)
            .into_iter()
            .map(|day| Entry::open(day, range))
            .collect(),
    )
}

/// "Friday, 9:00 AM – 9:00PM"
pub fn single_day(parser: &HoursParser, line: &str) -> Outcome {
    let Some(captures) = parser.single_day_time.captures(line) else {
        return Outcome::NoMatch;
    };
    let Some(day) = captures
        .name("day")
        .and_then(|m| CanonicalDay::from_token(m.as_str()))
    else {
        return Outcome::NoMatch;
    };
    Outcome::Matched(vec![Entry::open(day, time_range(&captures))])
}

/// Looks for day tokens and a time range anywhere in the line.
///
/// Every weekday found gets the first time range found. A "close"/"closed"
/// keyword turns the records into closed ones; if the line also had a time
/// range the outcome is `Ambiguous`.
pub fn fallback(parser: &HoursParser, line: &str) -> Outcome {
    let mut days: Vec<CanonicalDay> = Vec::new();
    for group in parser.fallback_days.find_iter(line) {
        for day in expand_days(group.as_str()) {
            if day.is_weekday() && !days.contains(&day) {
                days.push(day);
            }
        }
    }
    if days.is_empty() {
        return Outcome::NoMatch;
    }

    let range = parser
        .fallback_time
        .captures(line)
        .or_else(|| parser.fallback_twenty_four_hour.captures(line))
        .map(|captures| time_range(&captures));

    if !parser.closed_word.is_match(line) {
        let range = range.unwrap_or((None, None));
        return Outcome::Matched(days.into_iter().map(|day| Entry::open(day, range)).collect());
    }
    let entries = days.into_iter().map(Entry::closed).collect();
    match range {
        Some(_) => Outcome::Ambiguous(entries),
        None => Outcome::Matched(entries),
    }
}
