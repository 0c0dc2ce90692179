//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use natural13_calendar::SupportedRange;

use crate::config::{Natural13Config, RangeToml};
use crate::report::OutputFormat;

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub range: SupportedRange,
    pub format: OutputFormat,
}

/// Parses an output format name string into the corresponding enum variant.
pub fn parse_output_format(s: &str) -> Result<OutputFormat> {
    match s.to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("unknown output format: {other:?}"),
    }
}

/// Builds a `SupportedRange` from the `[range]` TOML section.
pub fn build_supported_range(range: &RangeToml) -> Result<SupportedRange> {
    SupportedRange::new(range.min_year, range.max_year).context("invalid [range] section")
}

/// Builds run settings from the config, letting `--json` override the
/// configured format.
pub fn build_settings(config: &Natural13Config, json: bool) -> Result<Settings> {
    let range = build_supported_range(&config.range)?;
    let format = if json {
        OutputFormat::Json
    } else {
        parse_output_format(&config.output.format)?
    };
    Ok(Settings { range, format })
}
