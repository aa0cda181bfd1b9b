use std::{cmp::Ordering, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{AMERICAN_FORMAT, Error, RANGE_SEPARATOR, parser::parse_constant, prelude::*};

/// Represents an inclusive range of calendar days.
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(
    fmt = "{} {} {}",
    "start.format(AMERICAN_FORMAT)",
    "RANGE_SEPARATOR",
    "end.format(AMERICAN_FORMAT)"
)]
pub struct DateRange {
    start: NaiveDate,
    end:   NaiveDate,
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `Error::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, Error> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first day of the range
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Number of days in the range, both ends included
    pub fn len(&self) -> usize {
        usize::try_from((self.end - self.start).num_days()).map_or(0, |days| days + 1)
    }

    /// Always false, a range holds at least its start date
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Every day of the range, ascending
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }

    pub fn to_vec(&self) -> Vec<NaiveDate> {
        self.days().collect()
    }
}

impl FromStr for DateRange {
    type Err = Error;

    /// Parses a two-sided range of constant dates such as `08-10-2024 ~ 2024-08-15`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once(RANGE_SEPARATOR)
            .ok_or_else(|| Error::invalid(format!("no range separator (expected '{RANGE_SEPARATOR}'): {s}")))?;

        let start = parse_constant(start.trim())?;
        let end = parse_constant(end.trim())?;
        Self::new(start, end)
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
