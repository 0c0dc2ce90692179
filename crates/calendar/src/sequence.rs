//! Day-by-day enumeration of a Natural13 year.

use chrono::NaiveDate;
use tracing::debug;

use crate::convert::to_natural13;
use crate::date::Natural13Date;
use crate::error::CalendarError;
use crate::solstice::{days_in_natural_year, winter_solstice};

/// Lists every day of Natural13 `year` with its Gregorian date.
///
/// Starts at Year Day (Dec 21 of `year`) and produces exactly 365 or 366
/// consecutive dates, ending on Dec 20 of `year + 1`.
///
/// # Errors
///
/// Returns [`CalendarError::UnrepresentableYear`] if the year's dates do not
/// fit in a [`NaiveDate`].
///
/// # Example
///
/// ```ignore
/// let days = natural_year_days(2023).unwrap();
/// assert_eq!(days.len(), 366);
/// ```
pub fn natural_year_days(year: i32) -> Result<Vec<(NaiveDate, Natural13Date)>, CalendarError> {
    let n_days = usize::from(days_in_natural_year(year));
    let mut days = Vec::with_capacity(n_days);
    let mut current = winter_solstice(year)?;
    for i in 0..n_days {
        days.push((current, to_natural13(current)));
        if i + 1 < n_days {
            current = current
                .succ_opt()
                .ok_or(CalendarError::UnrepresentableYear { year })?;
        }
    }
    debug!(year, n_days, "enumerated natural13 year");
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::NaturalDay;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn non_leap_year_length() {
        let days = natural_year_days(2024).unwrap();
        assert_eq!(days.len(), 365);
        assert_eq!(days[0].0, date(2024, 12, 21));
        assert_eq!(days.last().unwrap().0, date(2025, 12, 20));
    }

    #[test]
    fn leap_year_length() {
        let days = natural_year_days(2023).unwrap();
        assert_eq!(days.len(), 366);
        assert_eq!(days.last().unwrap().0, date(2024, 12, 20));
    }

    #[test]
    fn all_days_belong_to_the_year() {
        for (_, natural) in natural_year_days(2023).unwrap() {
            assert_eq!(natural.year(), 2023);
        }
    }

    #[test]
    fn first_day_is_year_day() {
        let days = natural_year_days(2010).unwrap();
        assert_eq!(days[0].1.day(), NaturalDay::YearDay);
    }

    #[test]
    fn unrepresentable() {
        assert_eq!(
            natural_year_days(i32::MAX).unwrap_err(),
            CalendarError::UnrepresentableYear { year: i32::MAX }
        );
    }
}
