use chrono::{Local, NaiveDate, TimeZone, Utc};

/// Everything outside of an expression that can alter how it resolves.
///
/// Open-ended ranges such as `"2024-08-15 ~"` run up to [`Context::today`].
/// Deciding which timezone "today" lives in is left to the caller:
///
/// ```
/// use chrono::NaiveDate;
/// use expressdate::{Context, parse};
///
/// let today = NaiveDate::from_ymd_opt(2024, 8, 17).unwrap();
/// let ctx = Context::new(today);
/// assert_eq!(parse("2024-08-15 ~", &ctx).unwrap().len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    today: NaiveDate,
}

impl Context {
    /// Create a context with an explicit reference date.
    pub const fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Create a context using the current date as seen from `tz`.
    pub fn from_timezone<Tz: TimeZone>(tz: &Tz) -> Self {
        Self::new(Utc::now().with_timezone(tz).date_naive())
    }

    /// The reference date that closes open-ended ranges.
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Replace the reference date of this context.
    #[must_use]
    pub const fn with_today(self, today: NaiveDate) -> Self {
        Self { today, ..self }
    }
}

impl Default for Context {
    /// Uses the local date of the system clock.
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}
