//! Normalizes the free-text weekly opening hours found on store-locator
//! listings into one record per day.
//!
//! ```
//! use outlet_hours::parse_hours;
//!
//! let records = parse_hours("Outlet", "Monday - Sunday (9:00AM - 10:00PM)");
//! assert_eq!(records.len(), 7);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod parser;
pub mod timing;

pub use error::{HoursError, Result};
pub use parser::parser::{parse_hours, parse_hours_report, HoursParser, ParseReport};
pub use timing::{daily::Daily, day::CanonicalDay, schedule::Schedule};

pub const TIME_FORMAT: &str = timing::time::TIME_FORMAT;
