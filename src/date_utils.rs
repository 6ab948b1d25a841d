//! Gregorian day arithmetic shared by the converter and the sequencer.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Signed number of whole days from `epoch` to `date`.
///
/// Both sides are reduced to their proleptic Gregorian day number, so the
/// time of day and any time zone attached to `date` play no part.
pub fn days_between<D: Datelike>(epoch: NaiveDate, date: &D) -> i64 {
    i64::from(date.num_days_from_ce()) - i64::from(epoch.num_days_from_ce())
}

/// Standard Gregorian leap rule.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Parse a `YYYY-MM-DD` date as typed into a date field.
pub fn parse_gregorian(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| CalendarError::InvalidDate {
        input: input.to_string(),
    })
}

/// All-day iCalendar date stamp (`YYYYMMDD`) from the local year/month/day.
pub fn format_ics_date<D: Datelike>(date: &D) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}
