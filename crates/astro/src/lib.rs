//! # natural13-astro
//!
//! Low-fidelity astronomical overlay for the Natural13 calendar: a
//! constant-period lunar phase estimate and a fixed-date solar term lookup.
//! Neither is ephemeris grade; both are closed-form and cheap enough
//! to call per rendered day.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use natural13_astro::{SolarTerm, lunar_phase, match_solar_term};
//!
//! let date = NaiveDate::from_ymd_opt(2025, 12, 21).unwrap();
//! assert_eq!(match_solar_term(date), Some(SolarTerm::WinterSolstice));
//!
//! let moon = lunar_phase(date);
//! assert!((0.0..=100.0).contains(&moon.illumination));
//! ```
//!
//! # Architecture
//!
//! ```text
//! lunar_phase(date)
//!   ├─ julian_day_at_noon()      (natural13-calendar)
//!   ├─ moon_age()                (lunar.rs)
//!   └─ PhaseName::from_age()     (lunar.rs)
//! match_solar_term(date)         (solar_term.rs)
//! ```

pub mod lunar;
pub mod solar_term;

pub use lunar::{
    LunarPhase, MAX_AGE, PhaseName, REFERENCE_NEW_MOON_JD, SYNODIC_MONTH, lunar_phase,
    lunar_phase_at, lunar_phase_from_jd, moon_age,
};
pub use solar_term::{SOLAR_TERM_TOLERANCE_DAYS, SOLAR_TERMS, SolarTerm, match_solar_term};
