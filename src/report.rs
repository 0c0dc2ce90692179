//! Output records and text rendering shared by the subcommands.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use natural13_astro::{LunarPhase, SolarTerm, lunar_phase, match_solar_term};
use natural13_calendar::{Natural13Date, Natural13Record, julian_day_number};

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Everything known about one Gregorian day.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayReport {
    pub gregorian: NaiveDate,
    pub julian_day_number: i64,
    pub natural13: Natural13Record,
    pub display: String,
    pub month_name: &'static str,
    pub seasonal_position: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub week_of_month: Option<u8>,
    pub lunar_phase: LunarPhase,
    pub solar_term: Option<SolarTerm>,
}

impl DayReport {
    pub fn new(gregorian: NaiveDate, natural: Natural13Date) -> Self {
        Self {
            gregorian,
            julian_day_number: julian_day_number(gregorian),
            natural13: natural.record(),
            display: natural.to_string(),
            month_name: natural.month_name(),
            seasonal_position: natural.seasonal_position(),
            day_of_week: natural.day_of_week(),
            week_of_month: natural.week_of_month(),
            lunar_phase: lunar_phase(gregorian),
            solar_term: match_solar_term(gregorian),
        }
    }

    /// Multi-line description for `convert` and `reverse`.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Gregorian:  {} (JDN {})", self.gregorian, self.julian_day_number);
        let _ = writeln!(out, "Natural13:  {}", self.display);
        let _ = writeln!(out, "Season:     {}", self.seasonal_position);
        if let (Some(dow), Some(wom)) = (self.day_of_week, self.week_of_month) {
            let _ = writeln!(out, "Week:       day {dow} of week {wom}");
        }
        let _ = writeln!(out, "Moon:       {}", render_phase(&self.lunar_phase));
        if let Some(term) = self.solar_term {
            let _ = writeln!(out, "Solar term: {term}");
        }
        out
    }

    /// Single-line form used by the `year` listing.
    pub fn render_row(&self) -> String {
        let term = self.solar_term.map(|t| t.name()).unwrap_or("");
        format!(
            "{}  {:<22} {:<16} {:<16} {}",
            self.gregorian,
            self.display,
            self.seasonal_position,
            self.lunar_phase.phase.as_str(),
            term
        )
        .trim_end()
        .to_string()
    }
}

/// Lunar phase for the `moon` subcommand.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonReport {
    pub gregorian: NaiveDate,
    #[serde(flatten)]
    pub phase: LunarPhase,
}

pub fn render_phase(phase: &LunarPhase) -> String {
    format!(
        "{} ({:.2}% lit, age {:.2} days)",
        phase.phase, phase.illumination, phase.age
    )
}

/// Prints `value` as pretty JSON, or the text produced by `text`.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
            println!("{json}");
        }
        OutputFormat::Text => print!("{}", text(value)),
    }
    Ok(())
}
