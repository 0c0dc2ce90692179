//! Structural validation and identity equality for Natural13 records.

use crate::date::{MonthDay, Natural13Record, NaturalDay, SpecialDay};
use crate::error::CalendarError;
use crate::month::MONTHS_PER_YEAR;

/// Earliest Natural13 year in the default supported range.
pub const MIN_SUPPORTED_YEAR: i32 = 1900;

/// Latest Natural13 year in the default supported range.
pub const MAX_SUPPORTED_YEAR: i32 = 2100;

/// Inclusive range of Natural13 years callers are allowed to use.
///
/// The arithmetic itself is valid beyond the range; the bound only limits
/// what the surrounding system has been exercised against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedRange {
    min_year: i32,
    max_year: i32,
}

impl SupportedRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidRange`] if `min_year > max_year`.
    pub fn new(min_year: i32, max_year: i32) -> Result<Self, CalendarError> {
        if min_year > max_year {
            return Err(CalendarError::InvalidRange {
                min: min_year,
                max: max_year,
            });
        }
        Ok(Self { min_year, max_year })
    }

    /// Returns the earliest supported year.
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Returns the latest supported year.
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Returns `true` if `year` is inside the range.
    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }

    /// Checks that `year` is inside the range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`] otherwise.
    pub fn check(&self, year: i32) -> Result<(), CalendarError> {
        if !self.contains(year) {
            return Err(CalendarError::YearOutOfRange {
                year,
                min: self.min_year,
                max: self.max_year,
            });
        }
        Ok(())
    }
}

impl Default for SupportedRange {
    fn default() -> Self {
        Self {
            min_year: MIN_SUPPORTED_YEAR,
            max_year: MAX_SUPPORTED_YEAR,
        }
    }
}

/// Parses the month/day/tag triple of a record into a [`NaturalDay`].
///
/// Year Day must be month 0 day 1, Leap Day month 6 day 29, and ordinary
/// days month 1..=13 day 1..=28. Leap-day existence is not checked here.
pub(crate) fn structure(record: &Natural13Record) -> Result<NaturalDay, CalendarError> {
    if record.month > MONTHS_PER_YEAR {
        return Err(CalendarError::InvalidMonth {
            month: record.month,
        });
    }
    match record.special_day {
        None => Ok(NaturalDay::Ordinary(MonthDay::new(record.month, record.day)?)),
        Some(special) => {
            let (expected_month, expected_day) = special.record_month_day();
            if (record.month, record.day) != (expected_month, expected_day) {
                return Err(CalendarError::InconsistentSpecialDay {
                    special,
                    month: record.month,
                    day: record.day,
                    expected_month,
                    expected_day,
                });
            }
            Ok(match special {
                SpecialDay::YearDay => NaturalDay::YearDay,
                SpecialDay::LeapDay => NaturalDay::LeapDay,
            })
        }
    }
}

/// Checks a record's structure and year against `range`, reporting the first
/// failing rule.
///
/// # Errors
///
/// Returns the [`CalendarError`] describing the first violation.
pub fn check(record: &Natural13Record, range: &SupportedRange) -> Result<(), CalendarError> {
    structure(record)?;
    range.check(record.year)
}

/// Returns `true` if `record` is structurally valid and its year lies in the
/// default supported range (1900..=2100).
pub fn validate(record: &Natural13Record) -> bool {
    validate_in(record, &SupportedRange::default())
}

/// Like [`validate`], with a caller-chosen supported range.
pub fn validate_in(record: &Natural13Record, range: &SupportedRange) -> bool {
    check(record, range).is_ok()
}

/// Identity equality: year, month, day and special-day tag.
pub fn equals(a: &Natural13Record, b: &Natural13Record) -> bool {
    a.year == b.year && a.month == b.month && a.day == b.day && a.special_day == b.special_day
}
