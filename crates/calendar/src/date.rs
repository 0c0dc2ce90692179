//! Natural13 date types.
//!
//! [`Natural13Date`] is the typed form: a year plus a [`NaturalDay`] that is
//! either an ordinary month/day or one of the two intercalary days.
//! [`Natural13Record`] is the flat exchange shape, where month `0` marks a
//! Year Day and the `special_day` tag marks intercalary days.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;
use crate::month::{DAYS_PER_MONTH, DAYS_PER_WEEK, Month};
use crate::solstice::is_leap_natural_year;
use crate::validate;

/// Tag for the two days that belong to no ordinary month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialDay {
    /// The solstice day that opens every Natural13 year.
    #[serde(rename = "Year Day")]
    YearDay,
    /// The extra day after month 6 in years whose span holds a Feb 29.
    #[serde(rename = "Leap Day")]
    LeapDay,
}

impl SpecialDay {
    /// Returns the display name.
    pub fn name(self) -> &'static str {
        match self {
            SpecialDay::YearDay => "Year Day",
            SpecialDay::LeapDay => "Leap Day",
        }
    }

    /// Returns the seasonal position shown for this day.
    pub fn seasonal_position(self) -> &'static str {
        match self {
            SpecialDay::YearDay => "Winter Solstice",
            SpecialDay::LeapDay => "Midyear",
        }
    }

    /// Returns the `(month, day)` pair used for this day in flat records.
    pub fn record_month_day(self) -> (u8, u8) {
        match self {
            SpecialDay::YearDay => (0, 1),
            SpecialDay::LeapDay => (6, 29),
        }
    }
}

impl fmt::Display for SpecialDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Month and day of an ordinary Natural13 day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// Creates an ordinary month/day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=13 and
    /// [`CalendarError::InvalidDay`] if `day` is not in 1..=28.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        let month = Month::new(month)?;
        if !(1..=DAYS_PER_MONTH).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.get(),
            });
        }
        Ok(Self { month, day })
    }

    /// Builds the month/day at a 1-based position among the 364 ordinary days.
    pub(crate) fn from_index(index: u16) -> Self {
        let zero = index.saturating_sub(1);
        let per_month = u16::from(DAYS_PER_MONTH);
        Self {
            month: Month::clamped(zero / per_month + 1),
            day: (zero % per_month + 1) as u8,
        }
    }

    /// Returns the 1-based position among the 364 ordinary days.
    pub(crate) fn index(self) -> u16 {
        u16::from(self.month.get() - 1) * u16::from(DAYS_PER_MONTH) + u16::from(self.day)
    }

    /// Returns the month.
    pub fn month(self) -> Month {
        self.month
    }

    /// Returns the day within the month (1..=28).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the day of the week (1..=7). Every month starts on day 1.
    pub fn day_of_week(self) -> u8 {
        (self.day - 1) % DAYS_PER_WEEK + 1
    }

    /// Returns the week within the month (1..=4).
    pub fn week_of_month(self) -> u8 {
        (self.day - 1) / DAYS_PER_WEEK + 1
    }
}

/// The position of a day within a Natural13 year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NaturalDay {
    /// The opening solstice day.
    YearDay,
    /// The intercalary day after month 6.
    LeapDay,
    /// A day inside one of the 13 ordinary months.
    Ordinary(MonthDay),
}

impl NaturalDay {
    /// Returns the special-day tag, or `None` for ordinary days.
    pub fn special(self) -> Option<SpecialDay> {
        match self {
            NaturalDay::YearDay => Some(SpecialDay::YearDay),
            NaturalDay::LeapDay => Some(SpecialDay::LeapDay),
            NaturalDay::Ordinary(_) => None,
        }
    }
}

/// A date in the Natural13 calendar.
///
/// Equality and hashing cover only the year and the day; display fields are
/// derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural13Date {
    year: i32,
    day: NaturalDay,
}

impl Natural13Date {
    /// Creates an ordinary date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the month or day is out of range.
    pub fn ordinary(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Ok(Self {
            year,
            day: NaturalDay::Ordinary(MonthDay::new(month, day)?),
        })
    }

    /// Creates the Year Day of `year`. Every Natural13 year has one.
    pub fn year_day(year: i32) -> Self {
        Self {
            year,
            day: NaturalDay::YearDay,
        }
    }

    /// Creates the Leap Day of `year`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NoLeapDay`] if the year has no Leap Day.
    pub fn leap_day(year: i32) -> Result<Self, CalendarError> {
        if !is_leap_natural_year(year) {
            return Err(CalendarError::NoLeapDay { year });
        }
        Ok(Self {
            year,
            day: NaturalDay::LeapDay,
        })
    }

    /// Creates a date from a year and an already-validated day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::NoLeapDay`] for a Leap Day in a year without one.
    pub fn new(year: i32, day: NaturalDay) -> Result<Self, CalendarError> {
        match day {
            NaturalDay::LeapDay => Self::leap_day(year),
            _ => Ok(Self { year, day }),
        }
    }

    pub(crate) fn from_parts(year: i32, day: NaturalDay) -> Self {
        Self { year, day }
    }

    /// Returns the Natural13 year (the Gregorian year of its opening solstice).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the position of this day within its year.
    pub fn day(self) -> NaturalDay {
        self.day
    }

    /// Returns the special-day tag, if any.
    pub fn special_day(self) -> Option<SpecialDay> {
        self.day.special()
    }

    /// Returns `true` for Year Day and Leap Day.
    pub fn is_intercalary(self) -> bool {
        self.special_day().is_some()
    }

    /// Returns the ordinary month, or `None` for intercalary days.
    pub fn month(self) -> Option<Month> {
        match self.day {
            NaturalDay::Ordinary(md) => Some(md.month()),
            _ => None,
        }
    }

    /// Returns the ordinary month/day, or `None` for intercalary days.
    pub fn month_day(self) -> Option<MonthDay> {
        match self.day {
            NaturalDay::Ordinary(md) => Some(md),
            _ => None,
        }
    }

    /// Returns the day of the week (1..=7) for ordinary days.
    pub fn day_of_week(self) -> Option<u8> {
        self.month_day().map(MonthDay::day_of_week)
    }

    /// Returns the week of the month (1..=4) for ordinary days.
    pub fn week_of_month(self) -> Option<u8> {
        self.month_day().map(MonthDay::week_of_month)
    }

    /// Returns the month name, or the intercalary day's name.
    pub fn month_name(self) -> &'static str {
        match self.day {
            NaturalDay::Ordinary(md) => md.month().name(),
            NaturalDay::YearDay => SpecialDay::YearDay.name(),
            NaturalDay::LeapDay => SpecialDay::LeapDay.name(),
        }
    }

    /// Returns the seasonal position label.
    pub fn seasonal_position(self) -> &'static str {
        match self.day {
            NaturalDay::Ordinary(md) => md.month().seasonal_position(),
            NaturalDay::YearDay => SpecialDay::YearDay.seasonal_position(),
            NaturalDay::LeapDay => SpecialDay::LeapDay.seasonal_position(),
        }
    }

    /// Returns the flat exchange record for this date.
    pub fn record(self) -> Natural13Record {
        let (month, day) = match self.day {
            NaturalDay::Ordinary(md) => (md.month().get(), md.day()),
            NaturalDay::YearDay => SpecialDay::YearDay.record_month_day(),
            NaturalDay::LeapDay => SpecialDay::LeapDay.record_month_day(),
        };
        Natural13Record {
            year: self.year,
            month,
            day,
            special_day: self.special_day(),
        }
    }
}

impl fmt::Display for Natural13Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.day {
            NaturalDay::Ordinary(md) => {
                write!(f, "{} {} {}", md.day(), md.month().name(), self.year)
            }
            NaturalDay::YearDay => write!(f, "Year Day {}", self.year),
            NaturalDay::LeapDay => write!(f, "Leap Day {}", self.year),
        }
    }
}

/// Flat Natural13 record as exchanged with callers.
///
/// Year Day is `month = 0, day = 1`; Leap Day is `month = 6, day = 29`; both
/// carry a `special_day` tag. Ordinary days have no tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Natural13Record {
    /// Natural13 year.
    pub year: i32,
    /// Month 0..=13; 0 only on Year Day.
    pub month: u8,
    /// Day 1..=28, or 29 on Leap Day.
    pub day: u8,
    /// Intercalary tag, present exactly on Year Day and Leap Day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_day: Option<SpecialDay>,
}

impl From<Natural13Date> for Natural13Record {
    fn from(date: Natural13Date) -> Self {
        date.record()
    }
}

impl TryFrom<Natural13Record> for Natural13Date {
    type Error = CalendarError;

    /// Checks structure and leap-day existence. The supported year range is
    /// not enforced here; see [`crate::validate()`].
    fn try_from(record: Natural13Record) -> Result<Self, Self::Error> {
        let day = validate::structure(&record)?;
        Natural13Date::new(record.year, day)
    }
}
