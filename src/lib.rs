//! Sets of calendar dates written as short text expressions.
//!
//! ```text
//! 2024-08-15                 a single day (MM-DD-YYYY works too)
//! 2024-08-10 ~ 2024-08-15    an inclusive range
//! 2024-08-10 ~               from a day up to today
//! 2024-**-**                 every valid date a wildcard pattern matches
//! 2024-**-**, mon            the same, Mondays only
//! ```
//!
//! ```
//! use expressdate::express;
//!
//! let mondays = express("2024-**-**, mon").unwrap();
//! let august = express("2024-08-**").unwrap();
//!
//! assert_eq!(mondays.len(), 53);
//! assert_eq!(august.intersection(&mondays).unwrap().len(), 4);
//! ```
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod consts;
mod prelude;

mod calendar;
mod context;
mod date_set;
mod error;
mod operand;
mod ops;
mod parser;
mod pattern;
mod range;

#[cfg(test)]
mod test_utils;

pub use calendar::{days_in_month, is_leap_year};
pub use consts::*;
pub use context::Context;
pub use date_set::DateSet;
pub use error::{Error, Result};
pub use operand::DateOperand;
pub use ops::{difference, intersection, symmetric_difference, union};
pub use parser::{parse, parse_constant};
pub use pattern::{DatePattern, Position, WeekdayFilter, expand, expand_filtered};
pub use range::DateRange;

/// Builds a [`DateSet`] from an expression, closing open-ended ranges on
/// the local date.
///
/// # Errors
/// See [`parse`].
pub fn express(text: impl Into<String>) -> Result<DateSet> {
    DateSet::new(text)
}
