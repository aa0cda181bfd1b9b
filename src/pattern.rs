//! Wildcard date patterns and their expansion into calendar dates.
//!
//! A pattern such as `2024-**-1*` is resolved one wildcard at a time, always
//! the leftmost one. Every [`Position`] knows which digits are legal given the
//! digits already fixed to its left, so impossible months and days are pruned
//! before they are ever built.

use std::fmt::{self, Write as _};
use std::ops::RangeInclusive;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::calendar::days_in_month;
use crate::consts::{DATE_SEPARATOR, MIN_YEAR, PATTERN_LEN, WILDCARD};
use crate::error::{Error, Result};
use crate::prelude::*;

const SEPARATOR: u8 = DATE_SEPARATOR as u8;
const WILDCARD_BYTE: u8 = WILDCARD as u8;

const YEAR: std::ops::Range<usize> = 0..4;
const MONTH: std::ops::Range<usize> = 5..7;
const DAY: std::ops::Range<usize> = 8..10;

const MONTH_TENS: usize = 5;
const MONTH_ONES: usize = 6;
const DAY_TENS: usize = 8;
const DAY_ONES: usize = 9;

/// A date in `YYYY-MM-DD` orientation where any digit may be a wildcard.
///
/// Month-first input (`MM-DD-YYYY`) is rewritten on construction: a text is
/// considered year-first iff its fifth character is a separator.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatePattern([u8; PATTERN_LEN]);

impl DatePattern {
    /// Normalizes and validates a pattern.
    ///
    /// # Errors
    /// Returns `Error::InvalidExpression` unless the text is ten characters of
    /// digits and wildcards with separators at the expected places.
    pub fn new(text: &str) -> Result<Self> {
        let bytes: [u8; PATTERN_LEN] = text
            .as_bytes()
            .try_into()
            .map_err(|_| Error::invalid(format!("expected {PATTERN_LEN} characters, found `{text}`")))?;

        let bytes = if bytes[YEAR.end] == SEPARATOR {
            bytes
        } else {
            let [m1, m2, s1, d1, d2, s2, y1, y2, y3, y4] = bytes;
            [y1, y2, y3, y4, s1, m1, m2, s2, d1, d2]
        };

        for (index, &byte) in bytes.iter().enumerate() {
            let valid = if index == YEAR.end || index == MONTH.end {
                byte == SEPARATOR
            } else {
                byte.is_ascii_digit() || byte == WILDCARD_BYTE
            };

            if !valid {
                return Err(Error::invalid(format!("unexpected character in `{text}`")));
            }
        }

        Ok(Self(bytes))
    }

    /// Digit at `index`, `None` for a wildcard.
    fn digit(&self, index: usize) -> Option<u8> {
        let byte = self.0[index];
        byte.is_ascii_digit().then(|| byte - b'0')
    }

    fn number(&self, range: std::ops::Range<usize>) -> Option<u16> {
        range
            .map(|index| self.digit(index))
            .try_fold(0, |acc, digit| Some(acc * 10 + u16::from(digit?)))
    }

    /// The year, if all of its digits are fixed.
    pub fn year(&self) -> Option<u16> {
        self.number(YEAR)
    }

    /// The month, if both of its digits are fixed. May be out of `1..=12`.
    pub fn month(&self) -> Option<u8> {
        self.number(MONTH).and_then(|m| u8::try_from(m).ok())
    }

    /// The day of month, if both of its digits are fixed.
    pub fn day(&self) -> Option<u8> {
        self.number(DAY).and_then(|d| u8::try_from(d).ok())
    }

    pub fn has_wildcard(&self) -> bool {
        self.0.contains(&WILDCARD_BYTE)
    }

    /// The wildcard that gets resolved next.
    pub fn leftmost_wildcard(&self) -> Option<Position> {
        self.0
            .iter()
            .position(|&byte| byte == WILDCARD_BYTE)
            .and_then(Position::from_index)
    }

    #[must_use]
    fn with_digit(mut self, position: Position, digit: u8) -> Self {
        debug_assert!(digit <= 9);
        self.0[position.index()] = b'0' + digit;
        self
    }

    /// Days in the pattern's month, or 0 while the year or month is unknown.
    fn max_day(&self) -> u8 {
        match (self.year(), self.month()) {
            (Some(year), Some(month)) => days_in_month(year, month),
            _ => 0,
        }
    }

    /// The calendar date, if every digit is fixed and forms a real date.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let year = self.year().filter(|&y| y >= MIN_YEAR)?;
        NaiveDate::from_ymd_opt(
            i32::from(year),
            u32::from(self.month()?),
            u32::from(self.day()?),
        )
    }
}

impl FromStr for DatePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|&byte| f.write_char(char::from(byte)))
    }
}

impl fmt::Debug for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DatePattern(\"{self}\")")
    }
}

/// A digit slot of a `YYYY-MM-DD` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// One of the four year digits, by index.
    Year(usize),
    MonthTens,
    MonthOnes,
    DayTens,
    DayOnes,
}

impl Position {
    const fn from_index(index: usize) -> Option<Self> {
        match index {
            0..=3 => Some(Self::Year(index)),
            MONTH_TENS => Some(Self::MonthTens),
            MONTH_ONES => Some(Self::MonthOnes),
            DAY_TENS => Some(Self::DayTens),
            DAY_ONES => Some(Self::DayOnes),
            _ => None,
        }
    }

    /// Index of this slot in the pattern.
    pub const fn index(self) -> usize {
        match self {
            Self::Year(index) => index,
            Self::MonthTens => MONTH_TENS,
            Self::MonthOnes => MONTH_ONES,
            Self::DayTens => DAY_TENS,
            Self::DayOnes => DAY_ONES,
        }
    }

    /// Legal digits for this slot, ascending.
    ///
    /// Every slot to the left is expected to be fixed already, which is the
    /// case when `self` is the pattern's leftmost wildcard. Slots to the right
    /// only narrow the range when they are fixed.
    pub fn digits(self, pattern: &DatePattern) -> RangeInclusive<u8> {
        match self {
            Self::Year(3) if YEAR.take(3).all(|index| pattern.digit(index) == Some(0)) => 1..=9,
            Self::Year(_) => 0..=9,
            Self::MonthTens => match pattern.digit(MONTH_ONES) {
                Some(0) => 1..=1,
                Some(ones) if ones > 2 => 0..=0,
                _ => 0..=1,
            },
            Self::MonthOnes => match pattern.digit(MONTH_TENS) {
                Some(0) => 1..=9,
                Some(1) => 0..=2,
                _ => empty(),
            },
            Self::DayTens => {
                let max = pattern.max_day();
                match pattern.digit(DAY_ONES) {
                    Some(ones) => span(u8::from(ones == 0), max.checked_sub(ones).map(|rest| rest / 10)),
                    None => 0..=max / 10,
                }
            }
            Self::DayOnes => {
                let max = pattern.max_day();
                match pattern.digit(DAY_TENS) {
                    Some(tens) => span(u8::from(tens == 0), max.checked_sub(tens * 10).map(|rest| rest.min(9))),
                    None => empty(),
                }
            }
        }
    }
}

#[allow(clippy::reversed_empty_ranges)]
const fn empty() -> RangeInclusive<u8> {
    1..=0
}

const fn span(low: u8, high: Option<u8>) -> RangeInclusive<u8> {
    match high {
        Some(high) => low..=high,
        None => empty(),
    }
}

/// Keeps only the dates falling on one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", "WEEKDAYS[_0.num_days_from_monday() as usize].0")]
pub struct WeekdayFilter(Weekday);

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("mon", Weekday::Mon),
    ("tue", Weekday::Tue),
    ("wed", Weekday::Wed),
    ("thu", Weekday::Thu),
    ("fri", Weekday::Fri),
    ("sat", Weekday::Sat),
    ("sun", Weekday::Sun),
];

impl WeekdayFilter {
    pub const fn new(weekday: Weekday) -> Self {
        Self(weekday)
    }

    pub const fn weekday(self) -> Weekday {
        self.0
    }

    pub fn matches(self, date: NaiveDate) -> bool {
        date.weekday() == self.0
    }
}

impl From<Weekday> for WeekdayFilter {
    fn from(weekday: Weekday) -> Self {
        Self(weekday)
    }
}

impl FromStr for WeekdayFilter {
    type Err = Error;

    /// Accepts the three-letter English names, in any case.
    fn from_str(s: &str) -> Result<Self> {
        let token = s.trim().to_ascii_lowercase();
        WEEKDAYS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, weekday)| Self(weekday))
            .ok_or_else(|| Error::invalid(format!("unknown weekday `{}`", s.trim())))
    }
}

/// Every calendar date matching `pattern`, ascending.
///
/// Leaves that still are not real dates once all wildcards are resolved
/// (e.g. `2024-**-31` for April) are skipped.
///
/// # Errors
/// A pattern without any wildcard must be a valid date, otherwise this
/// returns `Error::InvalidExpression`.
pub fn expand(pattern: &DatePattern) -> Result<Vec<NaiveDate>> {
    if !pattern.has_wildcard() {
        return pattern
            .to_date()
            .map(|date| vec![date])
            .ok_or_else(|| Error::invalid(format!("`{pattern}` is not a calendar date")));
    }

    let mut dates = Vec::new();
    expand_into(*pattern, &mut dates);

    #[cfg(feature = "log")]
    log::debug!("Expanded {pattern} into {} dates", dates.len());

    Ok(dates)
}

/// Same as [`expand`], keeping only dates on the filter's weekday.
///
/// # Errors
/// See [`expand`].
pub fn expand_filtered(pattern: &DatePattern, weekday: WeekdayFilter) -> Result<Vec<NaiveDate>> {
    let mut dates = expand(pattern)?;
    dates.retain(|&date| weekday.matches(date));
    Ok(dates)
}

fn expand_into(pattern: DatePattern, dates: &mut Vec<NaiveDate>) {
    let Some(position) = pattern.leftmost_wildcard() else {
        match pattern.to_date() {
            Some(date) => dates.push(date),
            None => {
                #[cfg(feature = "log")]
                log::trace!("Skipping {pattern}: not a calendar date");
            }
        }
        return;
    };

    let digits = position.digits(&pattern);

    #[cfg(feature = "log")]
    log::trace!("Resolving {position:?} of {pattern} over {digits:?}");

    for digit in digits {
        expand_into(pattern.with_digit(position, digit), dates);
    }
}
