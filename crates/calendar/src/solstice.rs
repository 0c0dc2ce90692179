//! Winter-solstice year anchors.
//!
//! The solstice is frozen to December 21. The astronomical solstice falls
//! between December 20 and 22, so the Year Day can sit one day off the true
//! event; this is a documented accuracy limitation of the calendar.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// Month of the fixed winter solstice.
pub const SOLSTICE_MONTH: u32 = 12;

/// Day of the fixed winter solstice.
pub const SOLSTICE_DAY: u32 = 21;

/// Whole days between December 21 and December 31.
pub(crate) const DAYS_AFTER_SOLSTICE: u16 = 10;

/// The Natural13 year a Gregorian date belongs to, with its opening day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearAnchor {
    /// Natural13 year.
    pub year: i32,
    /// December 21 of `year`.
    pub anchor: NaiveDate,
}

/// Returns `true` if `year` is a Gregorian leap year (proleptic rules).
pub fn is_gregorian_leap(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

/// Returns `true` if Natural13 `year` has a Leap Day.
///
/// The year runs from Dec 21 of `year` to Dec 20 of `year + 1`, so it holds a
/// Feb 29 exactly when `year + 1` is a Gregorian leap year.
pub fn is_leap_natural_year(year: i32) -> bool {
    is_gregorian_leap(year.saturating_add(1))
}

/// Returns the number of days in Natural13 `year` (365 or 366).
pub fn days_in_natural_year(year: i32) -> u16 {
    365 + u16::from(is_leap_natural_year(year))
}

/// Returns the fixed winter solstice (December 21) of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::UnrepresentableYear`] if `year` is outside the
/// range of [`NaiveDate`].
pub fn winter_solstice(year: i32) -> Result<NaiveDate, CalendarError> {
    NaiveDate::from_ymd_opt(year, SOLSTICE_MONTH, SOLSTICE_DAY)
        .ok_or(CalendarError::UnrepresentableYear { year })
}

/// Resolves the Natural13 year of `date` and the whole days elapsed since its
/// anchor (0 on the anchor itself).
///
/// Pure day-count arithmetic: it never builds the anchor date, so it is total
/// over every [`NaiveDate`].
pub(crate) fn natural_year_and_offset(date: NaiveDate) -> (i32, u16) {
    let year = date.year();
    let ordinal = date.ordinal() as u16;
    let solstice_ordinal = 355 + u16::from(is_gregorian_leap(year));
    if ordinal >= solstice_ordinal {
        (year, ordinal - solstice_ordinal)
    } else {
        (year - 1, ordinal + DAYS_AFTER_SOLSTICE)
    }
}

/// Resolves which Natural13 year `date` belongs to.
///
/// Dates on or after Dec 21 of `Y` belong to year `Y`; earlier dates belong
/// to `Y - 1`, anchored at Dec 21 of `Y - 1`.
///
/// # Errors
///
/// Returns [`CalendarError::UnrepresentableYear`] only when the anchor falls
/// before the earliest representable [`NaiveDate`].
pub fn year_anchor_for(date: NaiveDate) -> Result<YearAnchor, CalendarError> {
    let (year, _) = natural_year_and_offset(date);
    Ok(YearAnchor {
        year,
        anchor: winter_solstice(year)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn gregorian_leap_rules() {
        assert!(is_gregorian_leap(2024));
        assert!(is_gregorian_leap(2000));
        assert!(!is_gregorian_leap(1900));
        assert!(!is_gregorian_leap(2023));
        assert!(is_gregorian_leap(-4));
    }

    #[test]
    fn natural_leap_follows_next_gregorian_year() {
        assert!(is_leap_natural_year(2023));
        assert!(!is_leap_natural_year(2024));
        assert!(is_leap_natural_year(1999));
        assert!(!is_leap_natural_year(2099));
        assert_eq!(days_in_natural_year(2023), 366);
        assert_eq!(days_in_natural_year(2024), 365);
    }

    #[test]
    fn natural_year_length_matches_gregorian_span() {
        for year in 1900..=2100 {
            let start = winter_solstice(year).unwrap();
            let end = winter_solstice(year + 1).unwrap();
            let span = (end - start).num_days();
            assert_eq!(span, i64::from(days_in_natural_year(year)), "year {year}");
        }
    }

    #[test]
    fn solstice_is_dec_21() {
        assert_eq!(winter_solstice(2024).unwrap(), date(2024, 12, 21));
    }

    #[test]
    fn solstice_unrepresentable() {
        assert_eq!(
            winter_solstice(i32::MAX).unwrap_err(),
            CalendarError::UnrepresentableYear { year: i32::MAX }
        );
    }

    #[test]
    fn anchor_on_solstice() {
        let a = year_anchor_for(date(2024, 12, 21)).unwrap();
        assert_eq!(a.year, 2024);
        assert_eq!(a.anchor, date(2024, 12, 21));
    }

    #[test]
    fn anchor_before_solstice() {
        let a = year_anchor_for(date(2024, 12, 20)).unwrap();
        assert_eq!(a.year, 2023);
        assert_eq!(a.anchor, date(2023, 12, 21));

        let a = year_anchor_for(date(2025, 1, 1)).unwrap();
        assert_eq!(a.year, 2024);
    }

    #[test]
    fn offset_matches_anchor_distance() {
        let mut d = date(2019, 1, 1);
        while d < date(2026, 1, 1) {
            let (year, offset) = natural_year_and_offset(d);
            let anchor = winter_solstice(year).unwrap();
            assert_eq!(i64::from(offset), (d - anchor).num_days(), "date {d}");
            d = d.succ_opt().unwrap();
        }
    }
}
