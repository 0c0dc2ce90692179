//! Reverse command: Natural13 date -> Gregorian date.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use natural13_calendar::{Natural13Date, Natural13Record, SpecialDay, check, record_to_gregorian};

use crate::cli::ReverseArgs;
use crate::convert::Settings;
use crate::report::{self, DayReport};

pub fn run(args: ReverseArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("reverse").entered();
    let record = build_record(&args);

    check(&record, &settings.range).context("invalid Natural13 date")?;
    let date = record_to_gregorian(&record).context("invalid Natural13 date")?;
    let natural = Natural13Date::try_from(record).context("invalid Natural13 date")?;
    info!(%natural, %date, "converted");

    let report = DayReport::new(date, natural);
    report::emit(settings.format, &report, DayReport::render_text)
}

/// Builds the flat record described by the command-line flags.
fn build_record(args: &ReverseArgs) -> Natural13Record {
    let special_day = if args.year_day {
        Some(SpecialDay::YearDay)
    } else if args.leap_day {
        Some(SpecialDay::LeapDay)
    } else {
        None
    };
    let (month, day) = match special_day {
        Some(special) => special.record_month_day(),
        None => (args.month.unwrap_or(0), args.day.unwrap_or(0)),
    };
    Natural13Record {
        year: args.year,
        month,
        day,
        special_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(month: Option<u8>, day: Option<u8>, year_day: bool, leap_day: bool) -> ReverseArgs {
        ReverseArgs {
            year: 2023,
            month,
            day,
            year_day,
            leap_day,
        }
    }

    #[test]
    fn ordinary_record() {
        let record = build_record(&args(Some(3), Some(9), false, false));
        assert_eq!((record.month, record.day, record.special_day), (3, 9, None));
    }

    #[test]
    fn year_day_record() {
        let record = build_record(&args(None, None, true, false));
        assert_eq!(
            (record.month, record.day, record.special_day),
            (0, 1, Some(SpecialDay::YearDay))
        );
    }

    #[test]
    fn leap_day_record() {
        let record = build_record(&args(None, None, false, true));
        assert_eq!(
            (record.month, record.day, record.special_day),
            (6, 29, Some(SpecialDay::LeapDay))
        );
        assert_eq!(
            record_to_gregorian(&record).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 6, 7).unwrap()
        );
    }

    #[test]
    fn out_of_range_month_fails_validation() {
        let record = build_record(&args(Some(14), Some(1), false, false));
        assert!(record_to_gregorian(&record).is_err());
    }
}
