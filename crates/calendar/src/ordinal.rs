//! Ordinal day index within a Natural13 year.
//!
//! An ordinal counts whole days since the year's anchor: 0 is Year Day, 1 is
//! month 1 day 1. In leap years ordinal 169 is the Leap Day and every later
//! ordinal sits one past its ordinary-day position. That shift is applied in
//! `leap_shift` and nowhere else; both conversion directions go through it.

use crate::date::{MonthDay, Natural13Date, NaturalDay};
use crate::error::CalendarError;
use crate::month::DAYS_PER_MONTH;
use crate::solstice::is_leap_natural_year;

/// Ordinal of the Leap Day: the day after six full 28-day months.
pub const LEAP_DAY_ORDINAL: u16 = 6 * DAYS_PER_MONTH as u16 + 1;

/// Whole days elapsed since a Natural13 year's anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrdinalDay {
    value: u16,
    leap: bool,
}

/// Days the Leap Day has displaced a position that lies after it.
fn leap_shift(leap: bool, after_leap_day: bool) -> u16 {
    u16::from(leap && after_leap_day)
}

impl OrdinalDay {
    /// Creates an ordinal for a year with (`leap = true`) or without a Leap Day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidOrdinal`] past the year's last day.
    pub fn new(value: u16, leap: bool) -> Result<Self, CalendarError> {
        let max = 364 + u16::from(leap);
        if value > max {
            return Err(CalendarError::InvalidOrdinal {
                ordinal: value,
                max,
            });
        }
        Ok(Self { value, leap })
    }

    /// Wraps an offset already known to lie within its year.
    pub(crate) fn from_offset(value: u16, leap: bool) -> Self {
        debug_assert!(value <= 364 + u16::from(leap));
        Self { value, leap }
    }

    /// Returns the ordinal of `date` within its year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NoLeapDay`] if `date` is a Leap Day in a year
    /// without one.
    pub fn of(date: Natural13Date) -> Result<Self, CalendarError> {
        let year = date.year();
        let leap = is_leap_natural_year(year);
        let value = match date.day() {
            NaturalDay::YearDay => 0,
            NaturalDay::LeapDay if leap => LEAP_DAY_ORDINAL,
            NaturalDay::LeapDay => return Err(CalendarError::NoLeapDay { year }),
            NaturalDay::Ordinary(md) => {
                let index = md.index();
                index + leap_shift(leap, index >= LEAP_DAY_ORDINAL)
            }
        };
        Ok(Self { value, leap })
    }

    /// Returns the raw day count since the anchor.
    pub fn get(self) -> u16 {
        self.value
    }

    /// Returns `true` if the owning year has a Leap Day.
    pub fn is_leap(self) -> bool {
        self.leap
    }

    /// Resolves this ordinal to a position within the year.
    pub fn natural_day(self) -> NaturalDay {
        match self.value {
            0 => NaturalDay::YearDay,
            LEAP_DAY_ORDINAL if self.leap => NaturalDay::LeapDay,
            n => {
                let index = n - leap_shift(self.leap, n > LEAP_DAY_ORDINAL);
                NaturalDay::Ordinary(MonthDay::from_index(index))
            }
        }
    }
}
