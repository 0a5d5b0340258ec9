use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::DashError;
use crate::timeframe::Timeframe;

fn parse_timezone(s: &str) -> Result<Tz, DashError> {
    s.parse::<Tz>()
        .map_err(|_| DashError::InvalidTimezone(s.to_string()))
}

#[derive(Parser, Debug)]
#[command(name = "finance-dash")]
#[command(about = "Financial analytics dashboard over illustrative mock data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch interactive dashboard (default)
    #[command(visible_aliases = &["dash", "d"])]
    Dashboard(DashboardArgs),

    /// Render the dashboard once as a static document
    #[command(visible_alias = "report")]
    Show(ShowArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct DashboardArgs {
    /// Initially highlighted timeframe
    #[arg(short, long, value_enum, default_value = "month")]
    pub timeframe: Timeframe,

    /// IANA timezone used for "today" (defaults to local time)
    #[arg(long, value_parser = parse_timezone)]
    pub timezone: Option<Tz>,

    /// Seed for the synthetic series (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Append logs to this file (the dashboard discards them otherwise)
    #[arg(long)]
    pub log_file: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Timeframe recorded in the output
    #[arg(short, long, value_enum, default_value = "month")]
    pub timeframe: Timeframe,

    /// IANA timezone used for "today" (defaults to local time)
    #[arg(long, value_parser = parse_timezone)]
    pub timezone: Option<Tz>,

    /// Seed for the synthetic series (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_dashboard() {
        let cli = Cli::try_parse_from(["finance-dash"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(DashboardArgs::default().timeframe, Timeframe::Month);
    }

    #[test]
    fn test_dashboard_args() {
        let cli = Cli::try_parse_from([
            "finance-dash",
            "dash",
            "--timeframe",
            "year",
            "--timezone",
            "Europe/Prague",
            "--seed",
            "12",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Dashboard(args)) => {
                assert_eq!(args.timeframe, Timeframe::Year);
                assert_eq!(args.timezone, Some(chrono_tz::Europe::Prague));
                assert_eq!(args.seed, Some(12));
            }
            other => panic!("Expected dashboard, got {:?}", other),
        }
    }

    #[test]
    fn test_show_args() {
        let cli = Cli::try_parse_from(["finance-dash", "show", "-f", "csv", "-o", "out.csv"]).unwrap();
        match cli.command {
            Some(Commands::Show(args)) => {
                assert_eq!(args.format, OutputFormat::Csv);
                assert_eq!(args.output.as_deref(), Some("out.csv"));
                assert_eq!(args.timeframe, Timeframe::Month);
            }
            other => panic!("Expected show, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_timezone_rejected() {
        assert!(Cli::try_parse_from(["finance-dash", "dash", "--timezone", "Mars/Base"]).is_err());
    }

    #[test]
    fn test_invalid_timeframe_rejected_by_value_enum() {
        let err = Cli::try_parse_from(["finance-dash", "show", "--timeframe", "quarter"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }
}
