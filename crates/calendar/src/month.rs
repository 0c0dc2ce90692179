//! Natural13 month newtype and the fixed name table.

use std::fmt;

use crate::error::CalendarError;

/// Number of ordinary months in a Natural13 year.
pub const MONTHS_PER_YEAR: u8 = 13;

/// Number of days in every Natural13 month.
pub const DAYS_PER_MONTH: u8 = 28;

/// Number of days in a Natural13 week.
pub const DAYS_PER_WEEK: u8 = 7;

/// Display name and seasonal position of each month (index 0 = month 1).
///
/// Month 1 starts the day after the winter solstice; each entry spans 28
/// days, so the seasonal labels drift by at most a few days across years.
#[rustfmt::skip]
pub(crate) const MONTH_TABLE: [(&str, &str); MONTHS_PER_YEAR as usize] = [
    ("Stillness",  "Early Winter"),     // Dec 22 - Jan 18
    ("Frost",      "Deep Winter"),      // Jan 19 - Feb 15
    ("Thaw",       "Late Winter"),      // Feb 16 - Mar 15
    ("Seed",       "Early Spring"),     // Mar 16 - Apr 12
    ("Bloom",      "Mid Spring"),       // Apr 13 - May 10
    ("Growth",     "Late Spring"),      // May 11 - Jun 7
    ("Light",      "Early Summer"),     // Jun 8  - Jul 5
    ("Heat",       "Midsummer"),        // Jul 6  - Aug 2
    ("Ripening",   "Late Summer"),      // Aug 3  - Aug 30
    ("Harvest",    "Early Autumn"),     // Aug 31 - Sep 27
    ("Gathering",  "Mid Autumn"),       // Sep 28 - Oct 25
    ("Ember",      "Late Autumn"),      // Oct 26 - Nov 22
    ("Long Night", "Winter Threshold"), // Nov 23 - Dec 20
];

/// An ordinary Natural13 month (1..=13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    /// Creates a month from its number.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=13.
    pub fn new(month: u8) -> Result<Self, CalendarError> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        Ok(Self(month))
    }

    /// Builds a month from a computed index, clamping into 1..=13.
    pub(crate) fn clamped(month: u16) -> Self {
        Self(month.clamp(1, u16::from(MONTHS_PER_YEAR)) as u8)
    }

    /// Returns the month number (1..=13).
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the display name, e.g. `"Stillness"` for month 1.
    pub fn name(self) -> &'static str {
        MONTH_TABLE[self.index()].0
    }

    /// Returns the seasonal position, e.g. `"Early Winter"` for month 1.
    pub fn seasonal_position(self) -> &'static str {
        MONTH_TABLE[self.index()].1
    }

    fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
