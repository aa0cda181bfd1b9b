//! Resolution of textual expressions into ascending date sequences.
//!
//! ```text
//! expression := dateexpr? "~" dateexpr? | dateexpr
//! dateexpr   := pattern ("," weekday)? | constant
//! ```

use chrono::NaiveDate;

use crate::consts::{RANGE_SEPARATOR, WEEKDAY_SEPARATOR, WILDCARD};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::pattern::{DatePattern, WeekdayFilter, expand, expand_filtered};
use crate::range::DateRange;

/// Resolves an expression into its dates, ascending.
///
/// Open-ended ranges (`"2024-08-15 ~"`) end at `context.today()`.
///
/// # Errors
/// - `Error::InvalidExpression` if the text is not a date, a pattern or a
///   range of constant dates.
/// - `Error::InvalidRange` if a range starts after it ends.
pub fn parse(text: &str, context: &Context) -> Result<Vec<NaiveDate>> {
    let expr = text.trim();

    let dates = match expr.split_once(RANGE_SEPARATOR) {
        None => parse_single(expr)?,
        Some((left, right)) => parse_range(left.trim(), right.trim(), context)?.to_vec(),
    };

    #[cfg(feature = "log")]
    log::debug!("Parsed `{expr}` into {} dates", dates.len());

    Ok(dates)
}

/// Parses a single date in either orientation.
///
/// # Errors
/// Returns `Error::InvalidExpression` if the text is not exactly one
/// calendar date.
pub fn parse_constant(text: &str) -> Result<NaiveDate> {
    let pattern = DatePattern::new(text)?;

    if pattern.has_wildcard() {
        return Err(Error::invalid(format!("expected a constant date, found pattern `{text}`")));
    }

    pattern
        .to_date()
        .ok_or_else(|| Error::invalid(format!("`{text}` is not a calendar date")))
}

fn parse_range(left: &str, right: &str, context: &Context) -> Result<DateRange> {
    match (left.is_empty(), right.is_empty()) {
        (false, true) => DateRange::new(parse_constant(left)?, context.today()),
        (false, false) => DateRange::new(parse_constant(left)?, parse_constant(right)?),
        (true, _) => Err(Error::invalid(format!(
            "a range needs a start date before '{RANGE_SEPARATOR}'"
        ))),
    }
}

fn parse_single(expr: &str) -> Result<Vec<NaiveDate>> {
    if !expr.contains(WILDCARD) {
        return Ok(vec![parse_constant(expr)?]);
    }

    match expr.split_once(WEEKDAY_SEPARATOR) {
        None => expand(&DatePattern::new(expr)?),
        Some((pattern, weekday)) => {
            let weekday: WeekdayFilter = weekday.parse()?;
            expand_filtered(&DatePattern::new(pattern.trim())?, weekday)
        }
    }
}
