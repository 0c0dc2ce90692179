//! Nearest-match lookup of eight named solar terms.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Days either side of a term's nominal date that still match it.
pub const SOLAR_TERM_TOLERANCE_DAYS: u32 = 2;

/// Solstices, equinoxes and the four cross-quarter days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    /// Cross-quarter day between winter solstice and spring equinox.
    #[serde(rename = "Start of Spring")]
    StartOfSpring,
    /// March equinox.
    #[serde(rename = "Spring Equinox")]
    SpringEquinox,
    /// Cross-quarter day between spring equinox and summer solstice.
    #[serde(rename = "Start of Summer")]
    StartOfSummer,
    /// June solstice.
    #[serde(rename = "Summer Solstice")]
    SummerSolstice,
    /// Cross-quarter day between summer solstice and autumn equinox.
    #[serde(rename = "Start of Autumn")]
    StartOfAutumn,
    /// September equinox.
    #[serde(rename = "Autumn Equinox")]
    AutumnEquinox,
    /// Cross-quarter day between autumn equinox and winter solstice.
    #[serde(rename = "Start of Winter")]
    StartOfWinter,
    /// December solstice.
    #[serde(rename = "Winter Solstice")]
    WinterSolstice,
}

/// Nominal `(month, day)` of each term, in calendar order.
#[rustfmt::skip]
pub const SOLAR_TERMS: [(SolarTerm, u32, u32); 8] = [
    (SolarTerm::StartOfSpring,   2,  4),
    (SolarTerm::SpringEquinox,   3, 20),
    (SolarTerm::StartOfSummer,   5,  5),
    (SolarTerm::SummerSolstice,  6, 21),
    (SolarTerm::StartOfAutumn,   8,  7),
    (SolarTerm::AutumnEquinox,   9, 22),
    (SolarTerm::StartOfWinter,  11,  7),
    (SolarTerm::WinterSolstice, 12, 21),
];

impl SolarTerm {
    /// Returns the display name, e.g. `"Winter Solstice"`.
    pub fn name(self) -> &'static str {
        match self {
            SolarTerm::StartOfSpring => "Start of Spring",
            SolarTerm::SpringEquinox => "Spring Equinox",
            SolarTerm::StartOfSummer => "Start of Summer",
            SolarTerm::SummerSolstice => "Summer Solstice",
            SolarTerm::StartOfAutumn => "Start of Autumn",
            SolarTerm::AutumnEquinox => "Autumn Equinox",
            SolarTerm::StartOfWinter => "Start of Winter",
            SolarTerm::WinterSolstice => "Winter Solstice",
        }
    }

    /// Returns the nominal `(month, day)` of the term.
    pub fn nominal(self) -> (u32, u32) {
        match self {
            SolarTerm::StartOfSpring => (2, 4),
            SolarTerm::SpringEquinox => (3, 20),
            SolarTerm::StartOfSummer => (5, 5),
            SolarTerm::SummerSolstice => (6, 21),
            SolarTerm::StartOfAutumn => (8, 7),
            SolarTerm::AutumnEquinox => (9, 22),
            SolarTerm::StartOfWinter => (11, 7),
            SolarTerm::WinterSolstice => (12, 21),
        }
    }
}

impl fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the solar term within two days of `date`, if any.
///
/// Only the month and day are compared, so the match is the same every
/// year. Terms sit about six weeks apart, so at most one can match.
pub fn match_solar_term(date: NaiveDate) -> Option<SolarTerm> {
    SOLAR_TERMS
        .iter()
        .find(|&&(_, month, day)| {
            date.month() == month && date.day().abs_diff(day) <= SOLAR_TERM_TOLERANCE_DAYS
        })
        .map(|&(term, _, _)| term)
}
