use chrono::NaiveTime;
use serde::Serialize;

use super::{day::CanonicalDay, time};

/// The hours of one outlet on one day.
///
/// A closed day never carries times. An open day may still have unknown
/// (`None`) times when the source text named the day but no usable time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Daily {
    outlet_name: String,
    #[serde(rename = "day_of_week")]
    day: CanonicalDay,
    #[serde(rename = "opening_time", serialize_with = "time::serialize_opt")]
    opening: Option<NaiveTime>,
    #[serde(rename = "closing_time", serialize_with = "time::serialize_opt")]
    closing: Option<NaiveTime>,
    is_closed: bool,
}

impl Daily {
    pub fn new_open(
        outlet_name: &str,
        day: CanonicalDay,
        opening: Option<NaiveTime>,
        closing: Option<NaiveTime>,
    ) -> Self {
        Self {
            outlet_name: outlet_name.to_string(),
            day,
            opening,
            closing,
            is_closed: false,
        }
    }

    pub fn new_closed(outlet_name: &str, day: CanonicalDay) -> Self {
        Self {
            outlet_name: outlet_name.to_string(),
            day,
            opening: None,
            closing: None,
            is_closed: true,
        }
    }

    pub fn outlet_name(&self) -> &str {
        &self.outlet_name
    }

    pub fn day(&self) -> CanonicalDay {
        self.day
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn opening(&self) -> Option<NaiveTime> {
        self.opening
    }

    pub fn closing(&self) -> Option<NaiveTime> {
        self.closing
    }
}
