//! Date proximity rule: is a milestone exactly one calendar day away?

use crate::core::DateParseError;
use chrono::{Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Whether `date` falls on the day after `today`.
///
/// A missing or empty date is simply not due. A date that is present but not
/// a `YYYY-MM-DD` calendar date is an error, not `false`.
pub fn is_due_tomorrow(date: Option<&str>, today: NaiveDate) -> Result<bool, DateParseError> {
    let raw = match date {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(false),
    };

    // chrono skips whitespace before numeric fields; the date format allows none
    if raw.chars().any(char::is_whitespace) {
        return Err(DateParseError {
            value: raw.to_string(),
            reason: "unexpected whitespace".to_string(),
        });
    }

    let parsed = NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| DateParseError {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    Ok(today.succ_opt() == Some(parsed))
}

/// [`is_due_tomorrow`] against the local date of the current local time.
pub fn check_date_proximity(date: Option<&str>) -> Result<bool, DateParseError> {
    is_due_tomorrow(date, Local::now().date_naive())
}
