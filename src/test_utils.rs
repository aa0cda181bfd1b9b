use chrono::NaiveDate;

use crate::context::Context;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("invalid test date")
}

/// A context whose "today" is the given date.
pub fn context(year: i32, month: u32, day: u32) -> Context {
    Context::new(ymd(year, month, day))
}
