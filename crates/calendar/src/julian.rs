//! Julian Day conversion for civil instants.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Milliseconds in one civil day.
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Returns the continuous Julian Day of an instant.
///
/// `JD = ms_since_unix_epoch / 86_400_000 + 2_440_587.5`. The result is
/// monotonic in the instant; one day of wall-clock advance adds 1.0.
///
/// Callers comparing days must pass instants at a consistent time of day.
/// Mixing midnight and noon inputs shifts the result by half a day, which can
/// flip day-boundary decisions downstream. [`julian_day_at_noon`] fixes the
/// time of day for date-only inputs.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / MS_PER_DAY + UNIX_EPOCH_JD
}

/// Returns the Julian Day of 12:00 UTC on `date`.
///
/// The fractional part is always zero because Julian Days begin at noon.
pub fn julian_day_at_noon(date: NaiveDate) -> f64 {
    julian_day(noon_utc(date))
}

/// Returns the integer Julian Day Number of `date`.
///
/// 2000-01-01 is JDN 2_451_545.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    julian_day_at_noon(date).round() as i64
}

/// Returns 12:00 UTC on `date`.
pub fn noon_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN + chrono::TimeDelta::hours(12))
        .and_utc()
}
