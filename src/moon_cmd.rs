//! Moon command: lunar phase for a Gregorian date.

use anyhow::Result;
use chrono::Utc;
use tracing::{info, info_span};

use natural13_astro::lunar_phase;

use crate::cli::MoonArgs;
use crate::convert::Settings;
use crate::report::{self, MoonReport};

pub fn run(args: MoonArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("moon").entered();
    let date = args.date.unwrap_or_else(|| Utc::now().date_naive());

    let phase = lunar_phase(date);
    info!(%date, phase = %phase.phase, age = phase.age, "lunar phase computed");

    let report = MoonReport {
        gregorian: date,
        phase,
    };
    report::emit(settings.format, &report, |r| {
        format!("{}  {}\n", r.gregorian, report::render_phase(&r.phase))
    })
}
