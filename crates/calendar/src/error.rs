//! Error types for the natural13-calendar crate.

use crate::date::SpecialDay;

/// Error type for all fallible operations in the natural13-calendar crate.
///
/// Covers structurally invalid Natural13 records, leap days requested in
/// years that have none, and years outside the supported or representable
/// range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range.
    ///
    /// Ordinary days use months 1..=13; month 0 is only valid on a Year Day
    /// record.
    #[error("invalid month: {month} (must be 1..=13)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when an ordinary day is outside 1..=28.
    #[error("invalid day: {day} for month {month} (must be 1..=28)")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month the day was paired with.
        month: u8,
    },

    /// Returned when a special-day tag is paired with the wrong month/day.
    #[error(
        "{special} must be month {expected_month} day {expected_day}, got month {month} day {day}"
    )]
    InconsistentSpecialDay {
        /// The special-day tag carried by the record.
        special: SpecialDay,
        /// The month the record carried.
        month: u8,
        /// The day the record carried.
        day: u8,
        /// The month required for this tag.
        expected_month: u8,
        /// The day required for this tag.
        expected_day: u8,
    },

    /// Returned when a Leap Day is requested in a Natural13 year without one.
    #[error("natural13 year {year} has no leap day")]
    NoLeapDay {
        /// The Natural13 year.
        year: i32,
    },

    /// Returned when an ordinal day index exceeds the length of its year.
    #[error("invalid ordinal day: {ordinal} (must be 0..={max})")]
    InvalidOrdinal {
        /// The invalid ordinal.
        ordinal: u16,
        /// The last valid ordinal for the year.
        max: u16,
    },

    /// Returned when a year falls outside the supported range.
    #[error("year {year} outside supported range {min}..={max}")]
    YearOutOfRange {
        /// The offending year.
        year: i32,
        /// Lower bound of the supported range.
        min: i32,
        /// Upper bound of the supported range.
        max: i32,
    },

    /// Returned when a supported range is built with `min > max`.
    #[error("invalid supported range: {min}..={max}")]
    InvalidRange {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },

    /// Returned when a Gregorian date for the year cannot be represented.
    #[error("year {year} cannot be represented as a gregorian date")]
    UnrepresentableYear {
        /// The year that overflowed the Gregorian date type.
        year: i32,
    },
}
