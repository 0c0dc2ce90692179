use natural13_calendar::{
    CalendarError, Natural13Record, SpecialDay, SupportedRange, check, equals, record_to_gregorian,
    validate,
};

fn record(year: i32, month: u8, day: u8, special_day: Option<SpecialDay>) -> Natural13Record {
    Natural13Record {
        year,
        month,
        day,
        special_day,
    }
}

#[test]
fn every_ordinary_cell_is_valid() {
    for month in 1..=13u8 {
        for day in 1..=28u8 {
            assert!(validate(&record(2000, month, day, None)), "{month}/{day}");
        }
    }
}

#[test]
fn invalid_records_fail_reverse_conversion() {
    let cases: &[(Natural13Record, CalendarError)] = &[
        (
            record(2024, 14, 1, None),
            CalendarError::InvalidMonth { month: 14 },
        ),
        (
            record(2024, 0, 5, None),
            CalendarError::InvalidMonth { month: 0 },
        ),
        (
            record(2024, 2, 29, None),
            CalendarError::InvalidDay { day: 29, month: 2 },
        ),
        (
            record(2024, 3, 1, Some(SpecialDay::YearDay)),
            CalendarError::InconsistentSpecialDay {
                special: SpecialDay::YearDay,
                month: 3,
                day: 1,
                expected_month: 0,
                expected_day: 1,
            },
        ),
    ];
    for (rec, expected) in cases {
        assert!(!validate(rec), "{rec:?} should be invalid");
        assert_eq!(&record_to_gregorian(rec).unwrap_err(), expected);
    }
}

#[test]
fn out_of_range_year_is_usage_error() {
    let rec = record(1850, 1, 1, None);
    assert!(!validate(&rec));
    assert_eq!(
        check(&rec, &SupportedRange::default()).unwrap_err(),
        CalendarError::YearOutOfRange {
            year: 1850,
            min: 1900,
            max: 2100,
        }
    );
    // The arithmetic still works outside the supported range.
    assert!(record_to_gregorian(&rec).is_ok());
}

#[test]
fn equality_on_identity_fields() {
    let a = record(2024, 5, 5, None);
    let b = a;
    assert!(equals(&a, &b));
    assert!(!equals(&a, &record(2024, 5, 6, None)));
}
