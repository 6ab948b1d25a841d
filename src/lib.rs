//! Parsi calendar conversion and anniversary calendars.
//!
//! Converts Gregorian dates into Parsi (Yazdegerdi era, "YZ") dates under the
//! Shahenshahi, Kadmi or Fasli reckoning, walks the yearly anniversaries of a
//! date, and exports them as an iCalendar document.
//!
//! ```
//! use chrono::NaiveDate;
//! use parsi_calendar::{generate_anniversaries, generate_ics, gregorian_to_parsi, Variant};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
//! let parsi = gregorian_to_parsi(&date, Variant::Shahenshahi);
//! assert_eq!(parsi.to_string(), "3 Fravardin 1394 YZ");
//!
//! let list = generate_anniversaries(date, Variant::Shahenshahi, 2);
//! let ics = generate_ics(&list, "Hoshi's", "Birthday", Variant::Shahenshahi);
//! assert!(ics.contains("SUMMARY:Hoshi's 2nd Birthday"));
//! ```

pub mod anniversary;
pub mod date_utils;
pub mod error;
pub mod ics;
pub mod ordinal;
pub mod parsi;
pub mod variant;

pub use anniversary::{anniversaries, generate_anniversaries, Anniversaries, Anniversary};
pub use error::CalendarError;
pub use ics::{
    cancel_filename, event_uid, generate_cancel_ics, generate_cancel_ics_at, generate_ics,
    generate_ics_at, ics_filename,
};
pub use ordinal::ordinal;
pub use parsi::{gregorian_to_parsi, ParsiDate};
pub use variant::Variant;
