//! Year command: list every day of a Natural13 year.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use natural13_calendar::natural_year_days;

use crate::cli::YearArgs;
use crate::convert::Settings;
use crate::report::{self, DayReport};

pub fn run(args: YearArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("year", year = args.year).entered();
    settings.range.check(args.year).context("cannot list year")?;

    let days = natural_year_days(args.year)
        .with_context(|| format!("cannot list year {}", args.year))?;
    info!(n_days = days.len(), "year enumerated");

    let reports: Vec<DayReport> = days
        .into_iter()
        .map(|(date, natural)| DayReport::new(date, natural))
        .collect();
    report::emit(settings.format, &reports, |reports| render_table(reports))
}

fn render_table(reports: &[DayReport]) -> String {
    reports
        .iter()
        .map(|r| r.render_row() + "\n")
        .collect()
}
