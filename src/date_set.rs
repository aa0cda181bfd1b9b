use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::consts::{AMERICAN_FORMAT, RANGE_SEPARATOR, WILDCARD};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::operand::DateOperand;
use crate::ops;
use crate::parser::parse;
use crate::range::DateRange;

/// The dates denoted by an expression, alongside the expression itself.
///
/// Two sets are equal when they resolve to the same dates, whatever the text
/// they were written with:
///
/// ```
/// use expressdate::DateSet;
///
/// let pattern = DateSet::new("2024-08-1*").unwrap();
/// let range = DateSet::new("08-10-2024 ~ 08-19-2024").unwrap();
///
/// assert_eq!(pattern, range);
/// assert_ne!(pattern.to_string(), range.to_string());
/// ```
#[derive(Debug, Clone)]
pub struct DateSet {
    expression: String,
    dates: Vec<NaiveDate>,
    context: Context,
}

impl DateSet {
    /// Parses an expression, closing open-ended ranges on the local date.
    ///
    /// # Errors
    /// See [`parse`](crate::parse).
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        Self::with_context(expression, Context::default())
    }

    /// Parses an expression within an explicit context.
    ///
    /// # Errors
    /// See [`parse`](crate::parse).
    pub fn with_context(expression: impl Into<String>, context: Context) -> Result<Self> {
        let expression = expression.into();
        let dates = parse(&expression, &context)?;
        Ok(Self { expression, dates, context })
    }

    /// The expression this set was built from.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Resolved dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub const fn context(&self) -> &Context {
        &self.context
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// A weekday-filtered pattern may match no date at all.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// True if the expression holds neither a wildcard nor a range.
    pub fn is_constant(&self) -> bool {
        !self.expression.contains(WILDCARD) && !self.expression.contains(RANGE_SEPARATOR)
    }

    pub fn is_single_day(&self) -> bool {
        self.dates.len() == 1
    }

    /// True if there is no gap between consecutive dates.
    pub fn is_continuous(&self) -> bool {
        self.dates
            .windows(2)
            .all(|pair| pair[0].succ_opt() == Some(pair[1]))
    }

    /// Moves every date by a number of days.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if a date leaves the supported calendar.
    pub fn shift(&self, days: i64) -> Result<Vec<NaiveDate>> {
        self.dates
            .iter()
            .map(|&date| {
                TimeDelta::try_days(days)
                    .and_then(|delta| date.checked_add_signed(delta))
                    .ok_or(Error::OutOfRange { date, days })
            })
            .collect()
    }

    /// Moves every date by a duration, ignoring any part smaller than a day.
    ///
    /// # Errors
    /// Returns `Error::OutOfRange` if a date leaves the supported calendar.
    pub fn shift_by(&self, delta: TimeDelta) -> Result<Vec<NaiveDate>> {
        self.shift(delta.num_days())
    }

    /// Dates of `self` that are not in `other`.
    ///
    /// # Errors
    /// Fails if `other` is text that is not a valid expression.
    pub fn difference<'a>(&self, other: impl Into<DateOperand<'a>>) -> Result<Vec<NaiveDate>> {
        Ok(ops::difference(&self.dates, &other.into().resolve(&self.context)?))
    }

    /// Dates in `self`, `other` or both.
    ///
    /// # Errors
    /// Fails if `other` is text that is not a valid expression.
    pub fn union<'a>(&self, other: impl Into<DateOperand<'a>>) -> Result<Vec<NaiveDate>> {
        Ok(ops::union(&self.dates, &other.into().resolve(&self.context)?))
    }

    /// Dates in both `self` and `other`.
    ///
    /// # Errors
    /// Fails if `other` is text that is not a valid expression.
    pub fn intersection<'a>(&self, other: impl Into<DateOperand<'a>>) -> Result<Vec<NaiveDate>> {
        Ok(ops::intersection(&self.dates, &other.into().resolve(&self.context)?))
    }

    /// Dates in exactly one of `self` and `other`.
    ///
    /// # Errors
    /// Fails if `other` is text that is not a valid expression.
    pub fn symmetric_difference<'a>(
        &self,
        other: impl Into<DateOperand<'a>>,
    ) -> Result<Vec<NaiveDate>> {
        Ok(ops::symmetric_difference(&self.dates, &other.into().resolve(&self.context)?))
    }

    /// Checks whether the single day denoted by `item` belongs to this set.
    ///
    /// # Errors
    /// - `Error::AmbiguousSingleDay` if `item` does not denote exactly one date.
    /// - `Error::UnsupportedOperandType` for a raw date sequence.
    pub fn contains<'a>(&self, item: impl Into<DateOperand<'a>>) -> Result<bool> {
        let item = item.into();

        if let DateOperand::Sequence(_) = item {
            return Err(Error::UnsupportedOperandType {
                operation: "membership",
                operand: item.kind(),
            });
        }

        let date = single_day(&item.resolve(&self.context)?)?;
        Ok(self.dates.binary_search(&date).is_ok())
    }

    /// Builds the range running from this set's day to the day of `other`.
    ///
    /// ```
    /// use expressdate::express;
    ///
    /// let range = express("2024-08-14").unwrap().combine_range("2024-08-16").unwrap();
    /// assert_eq!(range.expression(), "08-14-2024 ~ 08-16-2024");
    /// assert_eq!(range.len(), 3);
    /// ```
    ///
    /// # Errors
    /// - `Error::AmbiguousSingleDay` if either side is not a single day.
    /// - `Error::UnsupportedOperandType` for a raw date sequence.
    /// - `Error::InvalidRange` if this set's day comes after the other one.
    pub fn combine_range<'a>(&self, other: impl Into<DateOperand<'a>>) -> Result<Self> {
        let start = single_day(&self.dates)?;
        let other = other.into();

        if let DateOperand::Sequence(_) = other {
            return Err(Error::UnsupportedOperandType {
                operation: "range combination",
                operand: other.kind(),
            });
        }

        let end = single_day(&other.resolve(&self.context)?)?;
        let range = DateRange::new(start, end)?;

        #[cfg(feature = "log")]
        log::debug!("Combined {start} and {end} into `{range}`");

        Ok(Self {
            expression: range.to_string(),
            dates: range.to_vec(),
            context: self.context,
        })
    }
}

fn single_day(dates: &[NaiveDate]) -> Result<NaiveDate> {
    match dates {
        [date] => Ok(*date),
        _ => Err(Error::AmbiguousSingleDay(dates.len())),
    }
}

impl From<NaiveDate> for DateSet {
    fn from(date: NaiveDate) -> Self {
        Self {
            expression: date.format(AMERICAN_FORMAT).to_string(),
            dates: vec![date],
            context: Context::default(),
        }
    }
}

impl TryFrom<DateOperand<'_>> for DateSet {
    type Error = Error;

    fn try_from(operand: DateOperand<'_>) -> Result<Self> {
        match operand {
            DateOperand::Container(set) => Ok(set.clone()),
            DateOperand::Text(text) => Self::new(text),
            DateOperand::Date(date) => Ok(Self::from(date)),
            DateOperand::Sequence(_) => Err(Error::TypeConstraint(operand.kind())),
        }
    }
}

impl FromStr for DateSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for DateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.expression)
    }
}

impl PartialEq for DateSet {
    fn eq(&self, other: &Self) -> bool {
        self.dates == other.dates
    }
}

impl Eq for DateSet {}

impl Hash for DateSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dates.hash(state);
    }
}

impl PartialEq<NaiveDate> for DateSet {
    fn eq(&self, other: &NaiveDate) -> bool {
        matches!(self.dates.as_slice(), [date] if date == other)
    }
}

impl PartialEq<DateSet> for NaiveDate {
    fn eq(&self, other: &DateSet) -> bool {
        other == self
    }
}

impl PartialEq<str> for DateSet {
    /// Text that fails to parse is never equal.
    fn eq(&self, other: &str) -> bool {
        parse(other, &self.context).is_ok_and(|dates| dates == self.dates)
    }
}

impl PartialEq<&str> for DateSet {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for DateSet {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.expression)
    }
}

impl<'de> Deserialize<'de> for DateSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
