use std::sync::LazyLock;

use regex::Regex;

use crate::timing::day::CanonicalDay;

// Separators between independent entries: "Sat & Sun", "Mon, Wed", "Sat and Sun"
static LIST_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:,|&|/|\band\b)\s*").unwrap());
// Separators inside a range: "Mon-Fri", "Mon – Fri", "Monday to Friday"
static RANGE_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s*(?:-|–|—|\bto\b)\s*").unwrap());

/// Expands one list entry: a single day or a `start - end` range.
///
/// A trailing separator ("Mon -") counts as the single day.
fn expand_entry(entry: &str) -> Option<Vec<CanonicalDay>> {
    let parts: Vec<&str> = RANGE_SEPARATOR.split(entry.trim()).collect();
    match parts.as_slice() {
        [day] | [day, ""] => CanonicalDay::from_token(day).map(|day| vec![day]),
        [start, end] => {
            let start = CanonicalDay::from_token(start)?;
            let end = CanonicalDay::from_token(end)?;
            let days = start.range_to(end);
            (!days.is_empty()).then_some(days)
        }
        _ => None,
    }
}

fn entries(text: &str) -> impl Iterator<Item = Option<Vec<CanonicalDay>>> + '_ {
    LIST_SEPARATOR
        .split(text.trim().trim_end_matches(','))
        .filter(|entry| !entry.trim().is_empty())
        .map(expand_entry)
}

fn push_unique(days: &mut Vec<CanonicalDay>, expanded: Vec<CanonicalDay>) {
    for day in expanded {
        if !days.contains(&day) {
            days.push(day);
        }
    }
}

/// Expands a day list where every entry has to be a day or day range.
///
/// "Saturday, Sunday & Public Holiday" gives the two weekend days and the
/// holiday; "Mon - Wed & Fri" gives four days. Returns `None` as soon as one
/// entry is not a day, or when the text holds no entries at all.
pub fn expand_days_strict(text: &str) -> Option<Vec<CanonicalDay>> {
    let mut days = Vec::new();
    for expanded in entries(text) {
        push_unique(&mut days, expanded?);
    }
    (!days.is_empty()).then_some(days)
}

/// Expands a day list, skipping entries that are not days.
pub fn expand_days(text: &str) -> Vec<CanonicalDay> {
    let mut days = Vec::new();
    for expanded in entries(text).flatten() {
        push_unique(&mut days, expanded);
    }
    days
}
