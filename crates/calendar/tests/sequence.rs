use std::collections::HashSet;

use natural13_calendar::{NaturalDay, days_in_natural_year, is_gregorian_leap, natural_year_days};

#[test]
fn year_lengths_match_gregorian() {
    for year in 1900..=2100 {
        let days = natural_year_days(year).unwrap();
        let expected = if is_gregorian_leap(year + 1) { 366 } else { 365 };
        assert_eq!(days.len(), expected, "year {year}");
        assert_eq!(days.len(), usize::from(days_in_natural_year(year)));
    }
}

#[test]
fn dates_are_consecutive_and_distinct() {
    for year in [1999, 2000, 2023, 2024, 2099] {
        let days = natural_year_days(year).unwrap();
        let gregorian: HashSet<_> = days.iter().map(|(g, _)| *g).collect();
        let natural: HashSet<_> = days.iter().map(|(_, n)| *n).collect();
        assert_eq!(gregorian.len(), days.len(), "duplicate gregorian date in {year}");
        assert_eq!(natural.len(), days.len(), "duplicate natural13 date in {year}");
        for pair in days.windows(2) {
            assert_eq!((pair[1].0 - pair[0].0).num_days(), 1);
        }
    }
}

#[test]
fn intercalary_counts() {
    for year in 1900..=2100 {
        let days = natural_year_days(year).unwrap();
        let year_days = days
            .iter()
            .filter(|(_, n)| n.day() == NaturalDay::YearDay)
            .count();
        let leap_days = days
            .iter()
            .filter(|(_, n)| n.day() == NaturalDay::LeapDay)
            .count();
        assert_eq!(year_days, 1, "year {year}");
        assert_eq!(leap_days, usize::from(is_gregorian_leap(year + 1)), "year {year}");
    }
}

#[test]
fn ordinary_months_have_28_days() {
    let days = natural_year_days(2023).unwrap();
    for month in 1..=13u8 {
        let count = days
            .iter()
            .filter(|(_, n)| n.month().map(|m| m.get()) == Some(month))
            .count();
        assert_eq!(count, 28, "month {month}");
    }
}
