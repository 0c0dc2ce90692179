//! Constant-period lunar phase approximation.
//!
//! Phase is derived from the time since a reference new moon modulo the mean
//! synodic month. There is no perturbation correction, so phase boundaries
//! can be off by several hours; good enough for calendar display.

use std::f64::consts::TAU;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use natural13_calendar::{julian_day, julian_day_at_noon};

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_67;

/// Julian Day of the reference new moon (2000-01-06 14:24 UTC).
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_550.1;

/// Largest reported moon age, in days.
pub const MAX_AGE: f64 = 29.53;

/// Upper bound (exclusive) of each phase's age window, in days.
///
/// Each window is one eighth of the synodic month, centered on its phase;
/// ages past the last bound wrap back to [`PhaseName::New`].
#[rustfmt::skip]
const PHASE_THRESHOLDS: [(f64, PhaseName); 8] = [
    ( 1.845_66, PhaseName::New),
    ( 5.536_99, PhaseName::WaxingCrescent),
    ( 9.228_31, PhaseName::FirstQuarter),
    (12.919_63, PhaseName::WaxingGibbous),
    (16.610_96, PhaseName::Full),
    (20.302_28, PhaseName::WaningGibbous),
    (23.993_61, PhaseName::LastQuarter),
    (27.684_93, PhaseName::WaningCrescent),
];

/// One of the eight named octants of the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseName {
    /// New moon.
    New,
    /// Waxing crescent.
    WaxingCrescent,
    /// First quarter.
    FirstQuarter,
    /// Waxing gibbous.
    WaxingGibbous,
    /// Full moon.
    Full,
    /// Waning gibbous.
    WaningGibbous,
    /// Last quarter.
    LastQuarter,
    /// Waning crescent.
    WaningCrescent,
}

impl PhaseName {
    /// Returns the snake_case identifier, e.g. `"waxing_crescent"`.
    pub fn as_str(self) -> &'static str {
        match self {
            PhaseName::New => "new",
            PhaseName::WaxingCrescent => "waxing_crescent",
            PhaseName::FirstQuarter => "first_quarter",
            PhaseName::WaxingGibbous => "waxing_gibbous",
            PhaseName::Full => "full",
            PhaseName::WaningGibbous => "waning_gibbous",
            PhaseName::LastQuarter => "last_quarter",
            PhaseName::WaningCrescent => "waning_crescent",
        }
    }

    /// Returns the phase whose window contains `age` days.
    pub fn from_age(age: f64) -> Self {
        PHASE_THRESHOLDS
            .iter()
            .find(|(upper, _)| age < *upper)
            .map_or(PhaseName::New, |&(_, phase)| phase)
    }
}

impl fmt::Display for PhaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lunar phase estimate for an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarPhase {
    /// Named octant.
    pub phase: PhaseName,
    /// Illuminated fraction of the disc, percent (0..=100, 2 dp).
    pub illumination: f64,
    /// Days since the last mean new moon (0..=29.53, 2 dp).
    pub age: f64,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Returns the unrounded days since the last mean new moon, in
/// `[0, SYNODIC_MONTH)`.
pub fn moon_age(jd: f64) -> f64 {
    let age = (jd - REFERENCE_NEW_MOON_JD).rem_euclid(SYNODIC_MONTH);
    // rem_euclid can round up to the modulus itself
    if age >= SYNODIC_MONTH { 0.0 } else { age }
}

/// Computes the lunar phase at Julian Day `jd`.
pub fn lunar_phase_from_jd(jd: f64) -> LunarPhase {
    let age = moon_age(jd);
    let illumination = 50.0 * (1.0 - (TAU * age / SYNODIC_MONTH).cos());
    LunarPhase {
        phase: PhaseName::from_age(age),
        illumination: round2(illumination).clamp(0.0, 100.0),
        age: round2(age).min(MAX_AGE),
    }
}

/// Computes the lunar phase at `instant`.
pub fn lunar_phase_at(instant: DateTime<Utc>) -> LunarPhase {
    lunar_phase_from_jd(julian_day(instant))
}

/// Computes the lunar phase at 12:00 UTC on `date`.
pub fn lunar_phase(date: NaiveDate) -> LunarPhase {
    lunar_phase_from_jd(julian_day_at_noon(date))
}
