use std::borrow::Cow;

use chrono::NaiveDate;

use crate::context::Context;
use crate::date_set::DateSet;
use crate::error::Result;
use crate::parser::parse;
use crate::prelude::*;

/// Anything a [`DateSet`] can be combined with.
///
/// ```
/// use chrono::NaiveDate;
/// use expressdate::express;
///
/// let week = express("2024-08-12 ~ 2024-08-18").unwrap();
/// let day = NaiveDate::from_ymd_opt(2024, 8, 14).unwrap();
///
/// assert_eq!(week.difference("2024-08-1*").unwrap().len(), 0);
/// assert_eq!(week.intersection(&[day][..]).unwrap(), [day]);
/// assert!(week.contains(day).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub enum DateOperand<'a> {
    Container(&'a DateSet),
    Sequence(&'a [NaiveDate]),
    Text(&'a str),
    Date(NaiveDate),
}

impl<'a> From<&'a Vec<NaiveDate>> for DateOperand<'a> {
    fn from(dates: &'a Vec<NaiveDate>) -> Self {
        Self::Sequence(dates)
    }
}

impl<'a> From<&'a String> for DateOperand<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> DateOperand<'a> {
    /// Resolves the operand into its dates, parsing text with `context`.
    ///
    /// # Errors
    /// Fails if a text operand is not a valid expression.
    pub fn resolve(self, context: &Context) -> Result<Cow<'a, [NaiveDate]>> {
        Ok(match self {
            Self::Container(set) => Cow::Borrowed(set.dates()),
            Self::Sequence(dates) => Cow::Borrowed(dates),
            Self::Text(text) => Cow::Owned(parse(text, context)?),
            Self::Date(date) => Cow::Owned(vec![date]),
        })
    }

    /// Short name of the operand kind, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Container(_) => "date set",
            Self::Sequence(_) => "date sequence",
            Self::Text(_) => "text expression",
            Self::Date(_) => "date",
        }
    }
}
