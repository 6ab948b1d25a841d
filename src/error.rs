//! Error types for parsing calendar input at the crate boundary.
//!
//! The conversion and sequencing functions themselves are total; only text
//! coming from users (variant names, date strings) can be rejected.

/// Error type for all fallible operations in the parsi_calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a variant name is not one of the three known reckonings.
    #[error("unknown calendar variant '{0}', expected shahenshahi, kadmi or fasli")]
    UnknownVariant(String),

    /// Returned when a Gregorian date string cannot be parsed.
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input text.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_variant() {
        let e = CalendarError::UnknownVariant("zurvani".to_string());
        assert_eq!(
            e.to_string(),
            "unknown calendar variant 'zurvani', expected shahenshahi, kadmi or fasli"
        );
    }

    #[test]
    fn error_invalid_date() {
        let e = CalendarError::InvalidDate {
            input: "2024-13-40".to_string(),
        };
        assert_eq!(e.to_string(), "invalid date '2024-13-40', expected YYYY-MM-DD");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CalendarError>();
    }
}
