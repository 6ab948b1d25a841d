//! Anniversary sequences anchored on a Gregorian base date.
//!
//! Each anniversary lies one Parsi year after the previous one. For Fasli the
//! step is 365 or 366 days depending on the previous occurrence's own Parsi
//! year; Shahenshahi and Kadmi always step 365 days.

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use crate::parsi::{gregorian_to_parsi, ParsiDate};
use crate::variant::{Variant, LEAP_YEAR_DAYS};

/// One recurrence of the base date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anniversary {
    number: usize,
    gregorian_date: NaiveDate,
    parsi_date: ParsiDate,
}

impl Anniversary {
    fn new(number: usize, gregorian_date: NaiveDate, variant: Variant) -> Self {
        Self {
            number,
            gregorian_date,
            parsi_date: gregorian_to_parsi(&gregorian_date, variant),
        }
    }

    /// 1-based occurrence number.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn gregorian_date(&self) -> NaiveDate {
        self.gregorian_date
    }

    pub fn parsi_date(&self) -> ParsiDate {
        self.parsi_date
    }
}

/// Lazy iterator over the anniversaries of a base date.
///
/// Cloning the iterator restarts nothing; it forks the sequence from the
/// current position. Call [`anniversaries`] again to start over.
#[derive(Debug, Clone)]
pub struct Anniversaries {
    variant: Variant,
    current: NaiveDate,
    current_year: i32,
    next_number: usize,
    remaining: usize,
}

impl Iterator for Anniversaries {
    type Item = Anniversary;

    fn next(&mut self) -> Option<Anniversary> {
        if self.remaining == 0 {
            return None;
        }

        let step = self.variant.year_length(self.current_year);
        let Some(date) = self.current.checked_add_days(Days::new(step)) else {
            warn!(
                after = %self.current,
                remaining = self.remaining,
                "anniversary falls outside the supported date range, stopping"
            );
            self.remaining = 0;
            return None;
        };

        let anniversary = Anniversary::new(self.next_number, date, self.variant);
        debug!(
            number = anniversary.number,
            step,
            gregorian = %date,
            parsi = %anniversary.parsi_date,
            "next anniversary"
        );

        self.current = date;
        self.current_year = anniversary.parsi_date.year();
        self.next_number += 1;
        self.remaining -= 1;
        Some(anniversary)
    }

    /// Exact unless the remaining steps could run past `NaiveDate::MAX`, in
    /// which case the sequence may end early and the lower bound drops to 0.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let fits = u64::try_from(self.remaining)
            .ok()
            .and_then(|n| n.checked_mul(LEAP_YEAR_DAYS))
            .and_then(|days| self.current.checked_add_days(Days::new(days)))
            .is_some();
        if fits {
            (self.remaining, Some(self.remaining))
        } else {
            (0, Some(self.remaining))
        }
    }
}

/// Starts the anniversary sequence of `base` under `variant`, yielding at most
/// `count` items.
pub fn anniversaries(base: NaiveDate, variant: Variant, count: usize) -> Anniversaries {
    Anniversaries {
        variant,
        current: base,
        current_year: gregorian_to_parsi(&base, variant).year(),
        next_number: 1,
        remaining: count,
    }
}

/// The first `count` anniversaries of `base`, numbered from 1.
pub fn generate_anniversaries(base: NaiveDate, variant: Variant, count: usize) -> Vec<Anniversary> {
    anniversaries(base, variant, count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate_anniversaries(ymd(2024, 9, 1), Variant::Fasli, 0).is_empty());
    }

    #[test]
    fn numbers_run_from_one() {
        let list = generate_anniversaries(ymd(2024, 9, 1), Variant::Kadmi, 7);
        assert_eq!(list.len(), 7);
        for (i, a) in list.iter().enumerate() {
            assert_eq!(a.number(), i + 1);
        }
    }

    #[test]
    fn first_anniversary_is_one_year_later() {
        let base = ymd(2024, 9, 1);
        let first = anniversaries(base, Variant::Shahenshahi, 1).next().unwrap();
        assert_eq!((first.gregorian_date() - base).num_days(), 365);
        assert_eq!(first.gregorian_date(), ymd(2025, 9, 1));
    }

    #[test]
    fn parsi_date_matches_converter() {
        for variant in Variant::ALL {
            for a in anniversaries(ymd(2001, 5, 20), variant, 30) {
                assert_eq!(a.parsi_date(), gregorian_to_parsi(&a.gregorian_date(), variant));
            }
        }
    }

    #[test]
    fn shahenshahi_keeps_parsi_day_fixed() {
        let base = ymd(2024, 8, 17);
        let base_parsi = gregorian_to_parsi(&base, Variant::Shahenshahi);
        for a in anniversaries(base, Variant::Shahenshahi, 10) {
            let p = a.parsi_date();
            assert_eq!((p.day(), p.month()), (base_parsi.day(), base_parsi.month()));
            assert_eq!(p.year(), base_parsi.year() + a.number() as i32);
        }
    }

    #[test]
    fn fasli_steps_over_leap_days() {
        // Fasli 1397 maps to Gregorian 2028, so the step out of June 2027 is 366.
        let list = generate_anniversaries(ymd(2024, 6, 15), Variant::Fasli, 4);
        let dates: Vec<NaiveDate> = list.iter().map(|a| a.gregorian_date()).collect();
        assert_eq!(
            dates,
            vec![ymd(2025, 6, 15), ymd(2026, 6, 15), ymd(2027, 6, 15), ymd(2028, 6, 15)]
        );
    }

    #[test]
    fn fasli_uses_previous_anniversary_year() {
        let base = ymd(2024, 6, 15);
        let list = generate_anniversaries(base, Variant::Fasli, 12);
        let mut prev = base;
        let mut prev_year = gregorian_to_parsi(&base, Variant::Fasli).year();
        for a in &list {
            let step = (a.gregorian_date() - prev).num_days() as u64;
            assert_eq!(step, Variant::Fasli.year_length(prev_year));
            prev = a.gregorian_date();
            prev_year = a.parsi_date().year();
        }
        assert!(list.iter().all(|a| a.gregorian_date().month() == 6));
    }

    #[test]
    fn stops_at_end_of_supported_range() {
        let list = generate_anniversaries(NaiveDate::MAX - Days::new(400), Variant::Kadmi, 5);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn size_hint_is_exact_away_from_range_end() {
        let mut seq = anniversaries(ymd(2024, 1, 1), Variant::Fasli, 5);
        assert_eq!(seq.size_hint(), (5, Some(5)));
        seq.next();
        assert_eq!(seq.size_hint(), (4, Some(4)));
        assert_eq!(seq.count(), 4);
    }

    #[test]
    fn size_hint_is_loose_near_range_end() {
        let seq = anniversaries(NaiveDate::MAX - Days::new(400), Variant::Kadmi, 5);
        assert_eq!(seq.size_hint(), (0, Some(5)));
        assert_eq!(seq.count(), 1);
    }

    #[test]
    fn iterator_is_lazy_and_restartable() {
        let base = ymd(2010, 3, 3);
        let seq = anniversaries(base, Variant::Fasli, 1_000_000);
        let first: Vec<_> = seq.clone().take(3).collect();
        let again: Vec<_> = seq.take(3).collect();
        assert_eq!(first, again);
    }
}
