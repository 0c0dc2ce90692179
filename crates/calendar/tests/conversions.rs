use chrono::NaiveDate;
use natural13_calendar::{
    Natural13Date, Natural13Record, NaturalDay, SpecialDay, record_to_gregorian, to_gregorian,
    to_natural13, validate, year_anchor_for,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn roundtrip_every_supported_day() {
    let mut d = date(1900, 12, 21);
    let end = date(2101, 12, 21);
    while d < end {
        let natural = to_natural13(d);
        assert!(
            validate(&natural.record()),
            "invalid record {:?} for {d}",
            natural.record()
        );
        assert_eq!(
            to_gregorian(&natural).unwrap(),
            d,
            "roundtrip failed for {d}: {natural}"
        );
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn roundtrip_through_flat_records() {
    let mut d = date(2019, 12, 1);
    while d < date(2021, 1, 31) {
        let record = to_natural13(d).record();
        assert_eq!(record_to_gregorian(&record).unwrap(), d, "record {record:?}");
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn year_matches_anchor() {
    let mut d = date(2022, 12, 1);
    while d < date(2025, 1, 31) {
        let anchor = year_anchor_for(d).unwrap();
        assert_eq!(to_natural13(d).year(), anchor.year, "date {d}");
        assert!(anchor.anchor <= d);
        d = d.succ_opt().unwrap();
    }
}

#[test]
fn reference_scenarios() {
    let cases: &[(NaiveDate, Natural13Record)] = &[
        (
            date(2024, 12, 21),
            Natural13Record {
                year: 2024,
                month: 0,
                day: 1,
                special_day: Some(SpecialDay::YearDay),
            },
        ),
        (
            date(2024, 12, 22),
            Natural13Record {
                year: 2024,
                month: 1,
                day: 1,
                special_day: None,
            },
        ),
        (
            date(2025, 1, 17),
            Natural13Record {
                year: 2024,
                month: 1,
                day: 27,
                special_day: None,
            },
        ),
    ];
    for &(gregorian, expected) in cases {
        assert_eq!(to_natural13(gregorian).record(), expected, "date {gregorian}");
    }

    let year_day = Natural13Record {
        year: 2024,
        month: 0,
        day: 1,
        special_day: Some(SpecialDay::YearDay),
    };
    assert_eq!(record_to_gregorian(&year_day).unwrap(), date(2024, 12, 21));
}

#[test]
fn every_solstice_is_year_day() {
    for year in 1900..=2100 {
        let natural = to_natural13(date(year, 12, 21));
        assert_eq!(natural, Natural13Date::year_day(year));
        let next = to_natural13(date(year, 12, 22));
        assert_eq!(next, Natural13Date::ordinary(year, 1, 1).unwrap());
    }
}

#[test]
fn leap_day_lands_on_169th_day() {
    for year in 1900..=2100 {
        let anchor = date(year, 12, 21);
        let day = to_natural13(anchor + chrono::Days::new(169));
        if natural13_calendar::is_leap_natural_year(year) {
            assert_eq!(day.day(), NaturalDay::LeapDay, "year {year}");
        } else {
            assert_eq!(day, Natural13Date::ordinary(year, 7, 1).unwrap(), "year {year}");
        }
    }
}
