use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::timing::{daily::Daily, schedule::Schedule};

use super::recognizers::{Entry, Outcome, RECOGNIZERS};

// A weekday token: "Mon", "Tues", "Wednesday", "Thurs", "Sat" ...
const DAY: &str = r"(?:Mon|Tues?|Wed(?:nes)?|Thur?s?|Fri|Sat(?:ur)?|Sun)(?:day)?";
const PUBLIC_HOLIDAY: &str = r"Public\s+Holidays?";
// "9:00 AM", "9:00PM", "10am", "22:00"
const TIME: &str = r"\d{1,2}(?::\d{2})?\s*[ap]\.?\s*m\.?|\d{1,2}:\d{2}";
const SEP: &str = r"\s*(?:-|–|—|\bto\b)\s*";

static PARSER: LazyLock<HoursParser> = LazyLock::new(HoursParser::new);

/// Everything one call to [`HoursParser::parse_report`] found.
#[derive(Debug, Default)]
pub struct ParseReport {
    /// At most one record per day, Monday first and the public holiday last.
    pub records: Vec<Daily>,
    /// Lines no recognizer could make sense of.
    pub dropped_lines: Vec<String>,
    /// Lines that mentioned both a closure and a time range. Their days were
    /// recorded as closed.
    pub ambiguous_lines: Vec<String>,
}

/// Turns free-text weekly opening hours into per-day records.
///
/// The parser only holds compiled patterns. Every call builds its own
/// [`Schedule`], so one instance can be shared across threads.
pub struct HoursParser {
    pub(super) closed_list_marker: Regex,
    pub(super) closed_marker: Regex,
    pub(super) day_comma_closed: Regex,
    pub(super) public_holiday: Regex,
    pub(super) day_list_time: Regex,
    pub(super) full_week: Regex,
    pub(super) twenty_four_hour_days: Regex,
    pub(super) day_range_time: Regex,
    pub(super) single_day_time: Regex,
    pub(super) fallback_days: Regex,
    pub(super) fallback_time: Regex,
    pub(super) fallback_twenty_four_hour: Regex,
    pub(super) closed_word: Regex,
}

impl Default for HoursParser {
    fn default() -> Self {
        Self::new()
    }
}

impl HoursParser {
    pub fn new() -> Self {
        // Every pattern is a constant, a failure here is a bug in the pattern itself.
        let regex = |pattern: String| Regex::new(&pattern).unwrap();
        Self {
            closed_list_marker: regex(r"(?i)^(?P<days>[^:]+?)\s*:\s*closed?\b".to_string()),
            closed_marker: regex(format!(
                r"(?i)\b(?P<day>{DAY}|{PUBLIC_HOLIDAY})\s*:\s*closed?\b"
            )),
            day_comma_closed: regex(r"(?i)^(?P<days>.+?)\s*,[^,]*\bclosed?\b".to_string()),
            public_holiday: regex(format!(r"(?i)\b{PUBLIC_HOLIDAY}\b")),
            day_list_time: regex(format!(
                r"(?i)^(?P<days>.+?)\s*,\s*(?P<open>{TIME}){SEP}(?P<close>{TIME})"
            )),
            full_week: regex(format!(
                r"(?i)\bMon(?:day)?{SEP}Sun(?:day)?\s*[,(]?\s*(?P<open>{TIME}){SEP}(?P<close>{TIME})"
            )),
            twenty_four_hour_days: regex(
                r"\b(?P<open>\d{4})\s*[-–—]\s*(?P<close>\d{4})\s*\((?P<days>[^)]+)\)".to_string(),
            ),
            day_range_time: regex(format!(
                r"(?i)\b(?P<start>{DAY}){SEP}(?P<end>{DAY})\s*,\s*(?P<open>{TIME}){SEP}(?P<close>{TIME})"
            )),
            single_day_time: regex(format!(
                r"(?i)\b(?P<day>{DAY})\s*,\s*(?P<open>{TIME}){SEP}(?P<close>{TIME})"
            )),
            fallback_days: regex(format!(
                r"(?i)\b{DAY}\b(?:(?:\s*[-–—&,]\s*|\s+to\s+)(?:{DAY}\b)?)*"
            )),
            fallback_time: regex(format!(
                r"(?i)\b(?P<open>{TIME}){SEP}(?P<close>{TIME})"
            )),
            fallback_twenty_four_hour: regex(
                r"\b(?P<open>\d{4})\s*[-–—]\s*(?P<close>\d{4})\b".to_string(),
            ),
            closed_word: regex(r"(?i)\bclosed?\b".to_string()),
        }
    }

    /// Runs the recognizer chain over one trimmed line.
    ///
    /// Returns the name of the recognizer that consumed the line with its outcome.
    pub fn recognize(&self, line: &str) -> Option<(&'static str, Outcome)> {
        RECOGNIZERS
            .iter()
            .map(|(name, recognizer)| (*name, recognizer(self, line)))
            .find(|(_, outcome)| *outcome != Outcome::NoMatch)
    }

    /// Parses the raw hours of one outlet and reports the lines it had to skip.
    pub fn parse_report(&self, outlet_name: &str, raw_hours: Option<&str>) -> ParseReport {
        let mut report = ParseReport::default();
        let Some(lines) = raw_hours.and_then(split_lines) else {
            return report;
        };

        let mut schedule = Schedule::new();
        for line in lines {
            let entries = match self.recognize(line) {
                Some((name, Outcome::Matched(entries))) => {
                    debug!(outlet_name, line, recognizer = name, records = entries.len(), "Recognized line");
                    entries
                }
                Some((name, Outcome::Ambiguous(entries))) => {
                    warn!(outlet_name, line, recognizer = name, "Line mixes closed and opening hours, recording as closed");
                    report.ambiguous_lines.push(line.to_string());
                    entries
                }
                Some((_, Outcome::NoMatch)) | None => {
                    debug!(outlet_name, line, "Dropped unrecognized line");
                    report.dropped_lines.push(line.to_string());
                    continue;
                }
            };
            for entry in entries {
                schedule.add_timing(to_daily(outlet_name, entry));
            }
        }
        report.records = schedule.into_records();
        report
    }

    pub fn parse(&self, outlet_name: &str, raw_hours: Option<&str>) -> Vec<Daily> {
        self.parse_report(outlet_name, raw_hours).records
    }
}

fn to_daily(outlet_name: &str, entry: Entry) -> Daily {
    if entry.closed {
        Daily::new_closed(outlet_name, entry.day)
    } else {
        Daily::new_open(outlet_name, entry.day, entry.opening, entry.closing)
    }
}

fn strip_quotes(raw: &str) -> &str {
    for (open, close) in [('"', '"'), ('\'', '\''), ('“', '”')] {
        if let Some(inner) = raw.strip_prefix(open).and_then(|raw| raw.strip_suffix(close)) {
            return inner;
        }
    }
    raw
}

/// Splits raw hours into trimmed, non-empty lines.
///
/// A single pair of wrapping quotes is removed first. Returns `None` when
/// there is nothing to parse: empty text or "Opening Soon".
pub fn split_lines(raw_hours: &str) -> Option<Vec<&str>> {
    let raw_hours = strip_quotes(raw_hours.trim()).trim();
    if raw_hours.is_empty() || raw_hours.eq_ignore_ascii_case("opening soon") {
        return None;
    }
    let lines: Vec<&str> = raw_hours
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    Some(lines)
}

/// Parses the raw hours of one outlet into at most one record per day.
///
/// Never fails: unrecognized lines are skipped and an empty, missing or
/// "Opening Soon" text gives an empty list. An empty list means the hours are
/// unknown, not that the outlet is always closed.
pub fn parse_hours<'a>(outlet_name: &str, raw_hours: impl Into<Option<&'a str>>) -> Vec<Daily> {
    PARSER.parse(outlet_name, raw_hours.into())
}

/// Same as [`parse_hours`], also returning the dropped and ambiguous lines.
pub fn parse_hours_report<'a>(
    outlet_name: &str,
    raw_hours: impl Into<Option<&'a str>>,
) -> ParseReport {
    PARSER.parse_report(outlet_name, raw_hours.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims_lines() {
        assert_eq!(
            split_lines("\"Monday: Closed\n\n   Tuesday, 9am - 5pm  \r\n\""),
            Some(vec!["Monday: Closed", "Tuesday, 9am - 5pm"])
        );
        assert_eq!(split_lines("'Sunday'"), Some(vec!["Sunday"]));
    }

    #[test]
    fn nothing_to_parse() {
        assert_eq!(split_lines(""), None);
        assert_eq!(split_lines("   "), None);
        assert_eq!(split_lines("\"\""), None);
        assert_eq!(split_lines("OPENING SOON"), None);
        assert_eq!(split_lines("\"Opening Soon\""), None);
    }

    #[test]
    fn first_recognizer_wins() {
        let parser = HoursParser::new();
        let (name, _) = parser.recognize("Tuesday : Closed").unwrap();
        assert_eq!(name, "closed_marker");
        let (name, _) = parser.recognize("Monday - Sunday (9:00AM - 10:00PM)").unwrap();
        assert_eq!(name, "full_week");
        let (name, _) = parser.recognize("0800 - 2200 (Sun - Thur)").unwrap();
        assert_eq!(name, "twenty_four_hour_days");
        let (name, _) = parser.recognize("Friday, 9:00 AM – 9:00PM").unwrap();
        assert_eq!(name, "single_day");
        let (name, _) = parser.recognize("Sat-Sun 10am-6pm").unwrap();
        assert_eq!(name, "fallback");
        assert!(parser.recognize("Call us for details").is_none());
    }

    #[test]
    fn report_lists_dropped_and_ambiguous_lines() {
        let report = HoursParser::new().parse_report(
            "Outlet",
            Some("Monday, 9:00 AM - 5:00 PM\nCall us for details\nTuesday 9am - 5pm closed"),
        );
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.dropped_lines, vec!["Call us for details"]);
        assert_eq!(report.ambiguous_lines, vec!["Tuesday 9am - 5pm closed"]);
        assert!(report.records[1].is_closed());
    }

    #[test]
    fn missing_hours_give_no_records() {
        assert!(parse_hours("Outlet", None::<&str>).is_empty());
        assert!(parse_hours("Outlet", "").is_empty());
    }
}
