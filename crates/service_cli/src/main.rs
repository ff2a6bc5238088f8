//! Almanac CLI - date arithmetic, number spelling and temperature statistics
//!
//! # Commands
//!
//! - `almanac difference --start <DATE> --end <DATE>` - Days between two dates
//! - `almanac words --number <DECIMAL>` - Spell a number in English
//! - `almanac stats --start <DATE> --end <DATE> --samples <FILE>` - Aggregate a daily forecast
//! - `almanac check` - Print the effective configuration
//!
//! Results go to stdout; logs go to stderr.

use almanac_cli::commands;
use almanac_cli::commands::stats::StatsRequest;
use almanac_cli::config::{build_config, CliArgs};
use almanac_cli::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Almanac command-line tools
#[derive(Parser)]
#[command(name = "almanac")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// How many years back a statistics range may start
    #[arg(long, global = true)]
    max_history_years: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the days between two dates
    Difference {
        /// First date (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Second date (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,
    },

    /// Spell a number in English words
    Words {
        /// Number in [0, 999.99], or any magnitude below 1000 with --signed
        #[arg(short, long, allow_hyphen_values = true)]
        number: String,

        /// Prefix the words with "positive" or "minus"
        #[arg(long)]
        signed: bool,
    },

    /// Aggregate daily temperatures over a date range
    Stats {
        /// Range start (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Range end (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,

        /// Daily forecast document (JSON)
        #[arg(long, value_name = "FILE")]
        samples: PathBuf,

        /// Reference date for the range checks (defaults to the local date)
        #[arg(long)]
        today: Option<String>,
    },

    /// Check configuration
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            max_history_years: cli.max_history_years,
            format: cli.format.clone(),
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    info!("Almanac v{}", almanac_cli::VERSION);

    match &cli.command {
        Commands::Difference { start, end } => commands::difference::run(start, end, config.format),
        Commands::Words { number, signed } => commands::words::run(number, *signed, config.format),
        Commands::Stats {
            start,
            end,
            samples,
            today,
        } => {
            let request = StatsRequest {
                start,
                end,
                samples,
                today: today.as_deref(),
            };
            commands::stats::run(&request, &config)
        }
        Commands::Check => commands::check::run(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_stats_with_globals() {
        let cli = Cli::try_parse_from([
            "almanac",
            "stats",
            "--start",
            "2026-10-01",
            "--end",
            "2026-10-07",
            "--samples",
            "forecast.json",
            "--format",
            "json",
            "--max-history-years",
            "2",
        ])
        .unwrap();

        let args = CliArgs::from(&cli);
        assert_eq!(args.format.as_deref(), Some("json"));
        assert_eq!(args.max_history_years, Some(2));
        assert!(matches!(cli.command, Commands::Stats { today: None, .. }));
    }

    #[test]
    fn test_parse_negative_number() {
        let cli = Cli::try_parse_from(["almanac", "words", "--number", "-5.4", "--signed"]).unwrap();
        match cli.command {
            Commands::Words { number, signed } => {
                assert_eq!(number, "-5.4");
                assert!(signed);
            }
            _ => panic!("expected words command"),
        }
    }
}
