use std::collections::HashSet;

use outlet_hours::{parse_hours, CanonicalDay, Daily};
use proptest::prelude::*;

const LINES: &[&str] = &[
    "Monday - Sunday (9:00AM - 10:00PM)",
    "Monday – Sunday, 10:00 AM – 8:00PM",
    "Saturday, Sunday & Public Holiday, 9:00 AM – 9:00 PM",
    "Mon & Wed, 10am - 6pm",
    "0800 - 2200 (Sun - Thur)",
    "0800 - 2230 (Fri & Sat)",
    "Monday - Saturday, 8:00 AM – 9:00PM",
    "Friday, 9:00 AM – 9:00PM",
    "Tuesday : Closed",
    "Sunday, closed",
    "Saturday, Sunday, Closed",
    "Saturday, Sunday & Public Holiday, Closed",
    "Monday, Wednesday: Closed",
    "Public Holiday: Closed",
    "Closed on Sat & Sun",
    "Thu-Fri 11am-7pm",
    "Opening hours may vary",
    "Wednesday",
];

fn lines() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(LINES), 0..8)
}

fn weekday() -> impl Strategy<Value = CanonicalDay> {
    prop::sample::select(CanonicalDay::WEEK.to_vec())
}

fn record_for(records: &[Daily], day: CanonicalDay) -> Option<&Daily> {
    records.iter().find(|record| record.day() == day)
}

proptest! {
    #[test]
    fn parsing_is_deterministic(lines in lines()) {
        let raw = lines.join("\n");
        prop_assert_eq!(parse_hours("Outlet", raw.as_str()), parse_hours("Outlet", raw.as_str()));
    }

    #[test]
    fn at_most_one_record_per_day(lines in lines()) {
        let records = parse_hours("Outlet", lines.join("\n").as_str());
        let unique: HashSet<CanonicalDay> = records.iter().map(Daily::day).collect();
        prop_assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn arbitrary_text_never_panics(raw in any::<String>()) {
        let records = parse_hours("Outlet", raw.as_str());
        prop_assert!(records.len() <= CanonicalDay::ALL.len());
        for record in &records {
            prop_assert!(!record.is_closed() || (record.opening().is_none() && record.closing().is_none()));
        }
    }

    #[test]
    fn closed_declaration_wins(
        lines in lines(),
        day in weekday(),
        position in any::<prop::sample::Index>(),
    ) {
        let open = format!("{}, 9:00 AM - 5:00 PM", day);
        let closed = format!("{}: Closed", day);
        let mut raw: Vec<&str> = lines.clone();
        raw.insert(position.index(raw.len() + 1), &closed);
        raw.push(&open);

        let records = parse_hours("Outlet", raw.join("\n").as_str());
        let record = record_for(&records, day);
        prop_assert!(record.is_some());
        let record = record.unwrap();
        prop_assert!(record.is_closed());
        prop_assert_eq!(record.opening(), None);
        prop_assert_eq!(record.closing(), None);
    }

    #[test]
    fn last_open_declaration_wins(day in weekday(), first in 1u32..12, second in 1u32..12) {
        let raw = format!(
            "{day}, {first}:00 AM - 5:00 PM\n{day}, {second}:30 AM - 6:00 PM",
        );
        let records = parse_hours("Outlet", raw.as_str());
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0].opening(), chrono::NaiveTime::from_hms_opt(second, 30, 0));
        prop_assert_eq!(records[0].closing(), chrono::NaiveTime::from_hms_opt(18, 0, 0));
    }
}
