//! # natural13-calendar
//!
//! Pure date arithmetic for the Natural13 calendar: 13 months of 28 days,
//! opened by a Year Day on the (fixed) December 21 winter solstice, with a
//! Leap Day after month 6 in years whose span contains a February 29.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"to_natural13()"| B["Natural13Date"]
//!     B -->|"to_gregorian()"| A
//!     B -->|".record()"| C["Natural13Record"]
//!     C -->|"record_to_gregorian()"| A
//!     C -->|"validate()"| D["bool"]
//!     A -->|"julian_day_at_noon()"| E["f64 Julian Day"]
//! ```
//!
//! Both conversion directions go through [`OrdinalDay`], the only place the
//! Leap Day shift is applied.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use natural13_calendar::{Natural13Date, SpecialDay, to_gregorian, to_natural13};
//!
//! let solstice = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
//! let natural = to_natural13(solstice);
//! assert_eq!(natural.special_day(), Some(SpecialDay::YearDay));
//! assert_eq!(to_gregorian(&natural).unwrap(), solstice);
//!
//! let leap = Natural13Date::leap_day(2023).unwrap();
//! assert_eq!(
//!     to_gregorian(&leap).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 6, 7).unwrap()
//! );
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `julian` | Instant to Julian Day |
//! | `solstice` | Year anchors and leap rules |
//! | `ordinal` | Day index within a year |
//! | `month` | Month newtype and name table |
//! | `date` | Typed date and flat record |
//! | `convert` | Forward and backward conversion |
//! | `validate` | Record checks and identity equality |
//! | `sequence` | Whole-year enumeration |
//! | `error` | Error types |

mod convert;
mod date;
mod error;
mod julian;
mod month;
mod ordinal;
mod sequence;
mod solstice;
mod validate;

pub use convert::{checked_to_natural13, record_to_gregorian, to_gregorian, to_natural13};
pub use date::{MonthDay, Natural13Date, Natural13Record, NaturalDay, SpecialDay};
pub use error::CalendarError;
pub use julian::{
    MS_PER_DAY, UNIX_EPOCH_JD, julian_day, julian_day_at_noon, julian_day_number, noon_utc,
};
pub use month::{DAYS_PER_MONTH, DAYS_PER_WEEK, MONTHS_PER_YEAR, Month};
pub use ordinal::{LEAP_DAY_ORDINAL, OrdinalDay};
pub use sequence::natural_year_days;
pub use solstice::{
    SOLSTICE_DAY, SOLSTICE_MONTH, YearAnchor, days_in_natural_year, is_gregorian_leap,
    is_leap_natural_year, winter_solstice, year_anchor_for,
};
pub use validate::{
    MAX_SUPPORTED_YEAR, MIN_SUPPORTED_YEAR, SupportedRange, check, equals, validate, validate_in,
};
