use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::date_utils::is_gregorian_leap_year;
use crate::error::CalendarError;

/// Parsi year that begins on every variant's epoch date.
pub const EPOCH_YEAR: i32 = 1394;

/// Offset from a Yazdegerdi year to the Gregorian year used for the Fasli
/// leap test.
pub const FASLI_GREGORIAN_OFFSET: i32 = 631;

/// Days in a common Parsi year.
pub const COMMON_YEAR_DAYS: u64 = 365;

/// Days in a Fasli leap year.
pub const LEAP_YEAR_DAYS: u64 = 366;

// Gregorian dates of 1 Fravardin 1394 YZ for each reckoning. A Fasli year
// starting in March of G holds February of G + 1 = `year + 631`.
lazy_static! {
    static ref SHAHENSHAHI_EPOCH: NaiveDate =
        NaiveDate::from_ymd_opt(2025, 8, 15).expect("valid Shahenshahi epoch");
    static ref KADMI_EPOCH: NaiveDate =
        NaiveDate::from_ymd_opt(2025, 7, 16).expect("valid Kadmi epoch");
    static ref FASLI_EPOCH: NaiveDate =
        NaiveDate::from_ymd_opt(2024, 3, 21).expect("valid Fasli epoch");
}

/// One of the three historical reckonings of the Parsi calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Variant {
    Shahenshahi,
    Kadmi,
    Fasli,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Shahenshahi, Variant::Kadmi, Variant::Fasli];

    /// Gregorian date on which year [`EPOCH_YEAR`] starts.
    pub fn epoch(self) -> NaiveDate {
        match self {
            Variant::Shahenshahi => *SHAHENSHAHI_EPOCH,
            Variant::Kadmi => *KADMI_EPOCH,
            Variant::Fasli => *FASLI_EPOCH,
        }
    }

    /// Human-readable name used in event descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Shahenshahi => "Shahenshahi",
            Variant::Kadmi => "Kadmi",
            Variant::Fasli => "Fasli",
        }
    }

    /// Lowercase key accepted by [`Variant::from_str`].
    pub fn key(self) -> &'static str {
        match self {
            Variant::Shahenshahi => "shahenshahi",
            Variant::Kadmi => "kadmi",
            Variant::Fasli => "fasli",
        }
    }

    /// Gregorian days from an anniversary falling in Parsi `year` to the next.
    ///
    /// Only Fasli follows the solar year; the other two reckonings keep a
    /// fixed 365-day year and drift against the Gregorian calendar.
    pub fn year_length(self, year: i32) -> u64 {
        match self {
            Variant::Fasli if is_fasli_leap_year(year) => LEAP_YEAR_DAYS,
            Variant::Fasli | Variant::Shahenshahi | Variant::Kadmi => COMMON_YEAR_DAYS,
        }
    }
}

/// Fasli leap test: Gregorian rule applied to `year + 631`.
pub fn is_fasli_leap_year(year: i32) -> bool {
    is_gregorian_leap_year(year + FASLI_GREGORIAN_OFFSET)
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Variant {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Variant::ALL
            .into_iter()
            .find(|v| v.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalendarError::UnknownVariant(s.to_string()))
    }
}

impl TryFrom<String> for Variant {
    type Error = CalendarError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("shahenshahi".parse::<Variant>().unwrap(), Variant::Shahenshahi);
        assert_eq!("Kadmi".parse::<Variant>().unwrap(), Variant::Kadmi);
        assert_eq!(" FASLI ".parse::<Variant>().unwrap(), Variant::Fasli);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = "gregorian".parse::<Variant>().unwrap_err();
        assert_eq!(err, CalendarError::UnknownVariant("gregorian".to_string()));
    }

    #[test]
    fn kadmi_runs_thirty_days_ahead_of_shahenshahi() {
        let gap = Variant::Shahenshahi.epoch() - Variant::Kadmi.epoch();
        assert_eq!(gap.num_days(), 30);
    }

    #[test]
    fn epoch_dates() {
        assert_eq!(Variant::Shahenshahi.epoch(), NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        assert_eq!(Variant::Kadmi.epoch(), NaiveDate::from_ymd_opt(2025, 7, 16).unwrap());
        assert_eq!(Variant::Fasli.epoch(), NaiveDate::from_ymd_opt(2024, 3, 21).unwrap());
    }

    #[test]
    fn fasli_leap_year_contains_the_leap_day() {
        // Fasli 1393 runs from 2023-03-21 and must hold Feb 29, 2024.
        let start_1393 = NaiveDate::from_ymd_opt(2023, 3, 21).unwrap();
        let start_1394 = Variant::Fasli.epoch();
        assert_eq!((start_1394 - start_1393).num_days() as u64, Variant::Fasli.year_length(1393));
    }

    #[test]
    fn labels_round_trip_through_keys() {
        for v in Variant::ALL {
            assert_eq!(v.key().parse::<Variant>().unwrap(), v);
            assert_eq!(v.to_string(), v.label());
        }
    }

    #[test]
    fn fasli_leap_years_follow_gregorian_offset() {
        // 1393 + 631 = 2024
        assert!(is_fasli_leap_year(1393));
        assert!(!is_fasli_leap_year(1394));
        assert!(is_fasli_leap_year(1397));
        // 1469 + 631 = 2100
        assert!(!is_fasli_leap_year(1469));
    }

    #[test]
    fn only_fasli_has_leap_years() {
        assert_eq!(Variant::Fasli.year_length(1393), 366);
        assert_eq!(Variant::Fasli.year_length(1394), 365);
        assert_eq!(Variant::Shahenshahi.year_length(1393), 365);
        assert_eq!(Variant::Kadmi.year_length(1393), 365);
    }
}
