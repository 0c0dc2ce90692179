//! Convert command: Gregorian date -> Natural13 date with lunar and solar overlays.

use anyhow::{Context, Result};
use chrono::Utc;
use tracing::{info, info_span};

use natural13_calendar::checked_to_natural13;

use crate::cli::ConvertArgs;
use crate::convert::Settings;
use crate::report::{self, DayReport};

pub fn run(args: ConvertArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("convert").entered();
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

    let natural = checked_to_natural13(date, &settings.range)
        .with_context(|| format!("cannot convert {date}"))?;
    info!(%date, %natural, "converted");

    let report = DayReport::new(date, natural);
    report::emit(settings.format, &report, DayReport::render_text)
}
