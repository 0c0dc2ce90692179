//! Gregorian <-> Natural13 conversion.

use chrono::{Days, NaiveDate};
use tracing::trace;

use crate::date::{Natural13Date, Natural13Record};
use crate::error::CalendarError;
use crate::ordinal::OrdinalDay;
use crate::solstice::{is_leap_natural_year, natural_year_and_offset, winter_solstice};
use crate::validate::SupportedRange;

/// Converts a Gregorian date to its Natural13 date.
///
/// The solstice itself is always Year Day, never "month 1 day 0". In years
/// with a Leap Day, the 169th day after the solstice is the Leap Day and the
/// ordinary days after it shift back by one.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use natural13_calendar::to_natural13;
///
/// let date = to_natural13(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap());
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.record().month, 1);
/// assert_eq!(date.record().day, 27);
/// ```
pub fn to_natural13(date: NaiveDate) -> Natural13Date {
    let (year, offset) = natural_year_and_offset(date);
    let leap = is_leap_natural_year(year);
    let ordinal = OrdinalDay::from_offset(offset, leap);
    let natural = Natural13Date::from_parts(year, ordinal.natural_day());
    trace!(%date, %natural, ordinal = offset, leap, "converted to natural13");
    natural
}

/// Like [`to_natural13`], but rejects dates whose Natural13 year is outside
/// `range`.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] for unsupported years.
pub fn checked_to_natural13(
    date: NaiveDate,
    range: &SupportedRange,
) -> Result<Natural13Date, CalendarError> {
    let natural = to_natural13(date);
    range.check(natural.year())?;
    Ok(natural)
}

/// Converts a Natural13 date back to its Gregorian date.
///
/// Inverse of [`to_natural13`]: `to_gregorian(&to_natural13(d)) == Ok(d)`.
///
/// # Errors
///
/// Returns [`CalendarError::NoLeapDay`] for a Leap Day in a year without one,
/// and [`CalendarError::UnrepresentableYear`] if the result does not fit in a
/// [`NaiveDate`].
pub fn to_gregorian(date: &Natural13Date) -> Result<NaiveDate, CalendarError> {
    let ordinal = OrdinalDay::of(*date)?;
    let anchor = winter_solstice(date.year())?;
    anchor
        .checked_add_days(Days::new(u64::from(ordinal.get())))
        .ok_or(CalendarError::UnrepresentableYear { year: date.year() })
}

/// Converts an untrusted flat record to its Gregorian date.
///
/// The record's structure is checked first; an invalid record fails with the
/// matching [`CalendarError`] instead of producing a date.
///
/// # Errors
///
/// Returns [`CalendarError`] for structurally invalid records and for the
/// failures of [`to_gregorian`].
pub fn record_to_gregorian(record: &Natural13Record) -> Result<NaiveDate, CalendarError> {
    let date = Natural13Date::try_from(*record)?;
    to_gregorian(&date)
}
