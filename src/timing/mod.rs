pub mod daily;
pub mod day;
pub mod schedule;
pub mod time;
