use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};

/// Natural13 solstice calendar converter.
#[derive(Parser)]
#[command(
    name = "natural13",
    version,
    about = "Convert between Gregorian and Natural13 dates, with lunar phase and solar terms"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./natural13.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON regardless of the configured output format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to Natural13, with moon phase and solar term.
    Convert(ConvertArgs),
    /// Convert a Natural13 date back to Gregorian.
    Reverse(ReverseArgs),
    /// List every day of a Natural13 year.
    Year(YearArgs),
    /// Show the lunar phase for a Gregorian date.
    Moon(MoonArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Gregorian date (YYYY-MM-DD). Defaults to today in UTC.
    pub date: Option<NaiveDate>,
}

/// Arguments for the `reverse` subcommand.
#[derive(clap::Args)]
#[command(group(
    ArgGroup::new("kind")
        .required(true)
        .args(["month", "year_day", "leap_day"])
))]
pub struct ReverseArgs {
    /// Natural13 year (the Gregorian year of its opening solstice).
    #[arg(short, long, allow_hyphen_values = true)]
    pub year: i32,

    /// Ordinary month (1-13).
    #[arg(short, long, requires = "day")]
    pub month: Option<u8>,

    /// Day within the month (1-28).
    #[arg(short, long, requires = "month")]
    pub day: Option<u8>,

    /// Select the Year Day.
    #[arg(long)]
    pub year_day: bool,

    /// Select the Leap Day.
    #[arg(long)]
    pub leap_day: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Natural13 year to list.
    #[arg(allow_hyphen_values = true)]
    pub year: i32,
}

/// Arguments for the `moon` subcommand.
#[derive(clap::Args)]
pub struct MoonArgs {
    /// Gregorian date (YYYY-MM-DD). Defaults to today in UTC.
    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_convert_with_date() {
        let cli = Cli::try_parse_from(["natural13", "convert", "2025-01-17"]).unwrap();
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 1, 17));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["natural13", "moon", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn reverse_requires_a_day_kind() {
        assert!(Cli::try_parse_from(["natural13", "reverse", "--year", "2024"]).is_err());
    }

    #[test]
    fn reverse_kinds_are_exclusive() {
        let result = Cli::try_parse_from([
            "natural13",
            "reverse",
            "--year",
            "2024",
            "--year-day",
            "--leap-day",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn reverse_month_requires_day() {
        let result = Cli::try_parse_from(["natural13", "reverse", "-y", "2024", "-m", "3"]);
        assert!(result.is_err());
        let cli =
            Cli::try_parse_from(["natural13", "reverse", "-y", "2024", "-m", "3", "-d", "9"])
                .unwrap();
        match cli.command {
            Command::Reverse(args) => {
                assert_eq!((args.month, args.day), (Some(3), Some(9)));
                assert!(!args.year_day);
            }
            _ => panic!("expected reverse"),
        }
    }

    #[test]
    fn invalid_date_rejected() {
        assert!(Cli::try_parse_from(["natural13", "convert", "2025-02-30"]).is_err());
    }
}
