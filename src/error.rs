use chrono::NaiveDate;

/// Error type for parsing expressions and combining date sets.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A date set can only be built from text, another set or a single date.
    #[error("Cannot build a date set from {0}")]
    TypeConstraint(&'static str),

    /// Text that is not a recognized date, range or wildcard pattern.
    #[error("Invalid date expression: {0}")]
    InvalidExpression(String),

    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// An operation requiring exactly one date got zero or several.
    #[error("Expected a single day, found {0} dates")]
    AmbiguousSingleDay(usize),

    #[error("Unsupported operand for {operation}: {operand}")]
    UnsupportedOperandType {
        operation: &'static str,
        operand: &'static str,
    },

    /// Shifting a date left the representable calendar.
    #[error("Shifting {date} by {days} days is out of range")]
    OutOfRange { date: NaiveDate, days: i64 },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(expr: impl std::fmt::Display) -> Self {
        Self::InvalidExpression(expr.to_string())
    }
}
