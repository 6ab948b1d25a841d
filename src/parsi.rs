//! Gregorian to Parsi (Yazdegerdi) date conversion.
//!
//! A Parsi year is twelve months of thirty days followed by the five Gatha
//! days. Years are counted from a fixed epoch per [`Variant`]; no
//! astronomical correction is applied.

use std::fmt;

use chrono::Datelike;
use tracing::trace;

use crate::date_utils::days_between;
use crate::variant::{Variant, EPOCH_YEAR};

/// Days in each of the twelve regular months.
pub const MONTH_DAYS: i64 = 30;

/// Day of year on which the Gatha days begin (12 * 30).
pub const GATHA_START: i64 = 360;

/// Days in the year used when normalizing a day count, for every variant.
pub const NORMALIZED_YEAR_DAYS: i64 = 365;

/// Name of the intercalary thirteenth month.
pub const GATHA: &str = "Gatha";

pub const MONTH_NAMES: [&str; 12] = [
    "Fravardin",
    "Ardibehesht",
    "Khordad",
    "Tir",
    "Amardad",
    "Shehrevar",
    "Meher",
    "Avan",
    "Adar",
    "Dae",
    "Bahman",
    "Aspandard",
];

/// A date in the Parsi calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsiDate {
    day: u32,
    month: u32,
    year: i32,
    month_name: &'static str,
}

impl ParsiDate {
    /// Builds the date lying `days` after 1 Fravardin of [`EPOCH_YEAR`].
    ///
    /// Negative counts walk backwards into earlier years.
    pub fn from_days(days: i64) -> Self {
        let year = i64::from(EPOCH_YEAR) + days.div_euclid(NORMALIZED_YEAR_DAYS);
        let day_of_year = days.rem_euclid(NORMALIZED_YEAR_DAYS);

        let (day, month, month_name) = if day_of_year >= GATHA_START {
            (day_of_year - GATHA_START + 1, 13, GATHA)
        } else {
            let month_index = day_of_year / MONTH_DAYS;
            (
                day_of_year % MONTH_DAYS + 1,
                month_index + 1,
                MONTH_NAMES[month_index as usize],
            )
        };

        Self {
            day: day as u32,
            month: month as u32,
            year: year as i32,
            month_name,
        }
    }

    /// Day of the month, 1..=30 (1..=5 in Gatha).
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Month number, 1..=12, or 13 for the Gatha days.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month_name(&self) -> &'static str {
        self.month_name
    }

    pub fn is_gatha(&self) -> bool {
        self.month == 13
    }

    /// Zero-based position within the 365-day year.
    pub fn day_of_year(&self) -> u32 {
        (self.month - 1) * MONTH_DAYS as u32 + self.day - 1
    }
}

impl fmt::Display for ParsiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} YZ", self.day, self.month_name, self.year)
    }
}

/// Converts any Gregorian calendar date to its Parsi date under `variant`.
///
/// Only the year, month and day of `date` are read, so date-times are
/// truncated to their calendar date.
pub fn gregorian_to_parsi<D: Datelike>(date: &D, variant: Variant) -> ParsiDate {
    let days = days_between(variant.epoch(), date);
    let parsi = ParsiDate::from_days(days);
    trace!(
        variant = variant.key(),
        days_since_epoch = days,
        parsi = %parsi,
        "converted gregorian date"
    );
    parsi
}
