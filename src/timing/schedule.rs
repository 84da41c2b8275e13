use chrono::NaiveTime;

use super::{daily::Daily, day::CanonicalDay};

/// Per-day merge of every record produced for one outlet.
///
/// Each slot is unset, open or closed. A closed record always replaces the
/// slot and can never be replaced again. An open record replaces an unset or
/// open slot, so the last open statement for a day wins.
#[derive(Debug, Default)]
pub struct Schedule {
    timings: [Option<Daily>; 8],
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the schedule.
    ///
    /// Returns `false` when the record was ignored because its day is already closed.
    pub fn add_timing(&mut self, timing: Daily) -> bool {
        let slot = &mut self.timings[timing.day().index()];
        if !timing.is_closed() && slot.as_ref().is_some_and(Daily::is_closed) {
            return false;
        }
        *slot = Some(timing);
        true
    }

    pub fn get(&self, day: CanonicalDay) -> Option<&Daily> {
        self.timings[day.index()].as_ref()
    }

    pub fn len(&self) -> usize {
        self.timings.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the outlet is open on `day` at `time`.
    ///
    /// `None` means unknown: the day was never mentioned or its times were not
    /// recognized. A closing time at or before the opening time runs past midnight.
    pub fn is_open(&self, day: CanonicalDay, time: NaiveTime) -> Option<bool> {
        let daily = self.get(day)?;
        if daily.is_closed() {
            return Some(false);
        }
        let (opening, closing) = (daily.opening()?, daily.closing()?);
        if opening < closing {
            Some(opening <= time && time < closing)
        } else {
            Some(time >= opening || time < closing)
        }
    }

    /// The merged records, Monday first and the public holiday last.
    pub fn into_records(self) -> Vec<Daily> {
        self.timings.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(hour, minute, 0)
    }

    fn open(day: CanonicalDay, from: u32, to: u32) -> Daily {
        Daily::new_open("Outlet", day, hm(from, 0), hm(to, 0))
    }

    #[test]
    fn closed_is_sticky() {
        let mut schedule = Schedule::new();
        assert!(schedule.add_timing(Daily::new_closed("Outlet", CanonicalDay::Tuesday)));
        assert!(!schedule.add_timing(open(CanonicalDay::Tuesday, 9, 17)));
        let tuesday = schedule.get(CanonicalDay::Tuesday).unwrap();
        assert!(tuesday.is_closed());
        assert_eq!(tuesday.opening(), None);
    }

    #[test]
    fn closed_overwrites_open() {
        let mut schedule = Schedule::new();
        schedule.add_timing(open(CanonicalDay::Friday, 9, 17));
        schedule.add_timing(Daily::new_closed("Outlet", CanonicalDay::Friday));
        assert!(schedule.get(CanonicalDay::Friday).unwrap().is_closed());
    }

    #[test]
    fn last_open_wins() {
        let mut schedule = Schedule::new();
        schedule.add_timing(open(CanonicalDay::Monday, 9, 17));
        schedule.add_timing(open(CanonicalDay::Monday, 10, 22));
        let monday = schedule.get(CanonicalDay::Monday).unwrap();
        assert_eq!(monday.opening(), hm(10, 0));
        assert_eq!(monday.closing(), hm(22, 0));
    }

    #[test]
    fn unset_days_produce_no_records() {
        let mut schedule = Schedule::new();
        assert!(schedule.is_empty());
        schedule.add_timing(open(CanonicalDay::Sunday, 9, 17));
        schedule.add_timing(Daily::new_closed("Outlet", CanonicalDay::PublicHoliday));
        schedule.add_timing(open(CanonicalDay::Monday, 9, 17));
        let days: Vec<CanonicalDay> = schedule.into_records().iter().map(Daily::day).collect();
        assert_eq!(
            days,
            vec![
                CanonicalDay::Monday,
                CanonicalDay::Sunday,
                CanonicalDay::PublicHoliday
            ]
        );
    }

    #[test]
    fn is_open_queries() {
        let mut schedule = Schedule::new();
        schedule.add_timing(open(CanonicalDay::Monday, 9, 22));
        schedule.add_timing(open(CanonicalDay::Saturday, 18, 2));
        schedule.add_timing(Daily::new_closed("Outlet", CanonicalDay::Tuesday));
        schedule.add_timing(Daily::new_open("Outlet", CanonicalDay::Wednesday, None, None));

        assert_eq!(schedule.is_open(CanonicalDay::Monday, hm(9, 0).unwrap()), Some(true));
        assert_eq!(schedule.is_open(CanonicalDay::Monday, hm(22, 0).unwrap()), Some(false));
        assert_eq!(schedule.is_open(CanonicalDay::Saturday, hm(1, 30).unwrap()), Some(true));
        assert_eq!(schedule.is_open(CanonicalDay::Saturday, hm(12, 0).unwrap()), Some(false));
        assert_eq!(schedule.is_open(CanonicalDay::Tuesday, hm(12, 0).unwrap()), Some(false));
        assert_eq!(schedule.is_open(CanonicalDay::Wednesday, hm(12, 0).unwrap()), None);
        assert_eq!(schedule.is_open(CanonicalDay::Thursday, hm(12, 0).unwrap()), None);
    }
}
