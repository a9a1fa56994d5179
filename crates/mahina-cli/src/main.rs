//! Mahina CLI
//!
//! Prints the Hawaiian moon (Kaulana Mahina) for every day of a month.
//!
//! ```sh
//! mahina 2025-11                      # Pacific/Honolulu
//! mahina 2025-11 Europe/Berlin
//! mahina 2025-11 --ascii --phase
//! mahina 2025-11 --format json
//! ```
//!
//! Exit codes: 0 on success, 1 when the timezone or a day's local noon
//! cannot be resolved, 2 on a missing or malformed month. Nothing is written
//! to stdout unless the whole month was computed.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use mahina_core::{DEFAULT_TIME_ZONE, YearMonth, month_calendar, resolve_time_zone};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

mod error;
mod output;

use error::CliExitCode;
use output::{OutputFormat, TextOptions, render_json, render_text};

/// Hawaiian moon calendar for one month
#[derive(Parser, Debug)]
#[command(name = "mahina")]
#[command(version)]
#[command(about = "Print the Hawaiian moon name for every day of a month")]
struct Cli {
    /// Month to print, as YYYY-MM
    month: YearMonth,

    /// IANA timezone whose local noon is used [default: Pacific/Honolulu]
    timezone: Option<String>,

    /// IANA timezone, as an option
    #[arg(long = "tz", value_name = "TIMEZONE", conflicts_with = "timezone")]
    tz: Option<String>,

    /// Print names without ʻokina and kahakō
    #[arg(long)]
    ascii: bool,

    /// Append the English phase name to each line
    #[arg(long)]
    phase: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn zone_name(&self) -> &str {
        self.timezone
            .as_deref()
            .or(self.tz.as_deref())
            .unwrap_or(DEFAULT_TIME_ZONE)
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Renders the whole month into a string.
fn run(cli: &Cli) -> Result<String> {
    let month = cli.month;
    let zone_name = cli.zone_name();
    let tz = resolve_time_zone(zone_name)?;
    let calendar = month_calendar(month, &tz).with_context(|| format!("cannot build calendar for {}", month))?;
    debug!(%month, zone = zone_name, "rendering calendar");

    match cli.format {
        OutputFormat::Text => Ok(render_text(&calendar, TextOptions { ascii: cli.ascii, phase: cli.phase })),
        OutputFormat::Json => render_json(&calendar).context("failed to serialize calendar"),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(out) => {
            print!("{}", out);
            CliExitCode::Success.into()
        }
        Err(e) => {
            tracing::error!(error = %e, "calendar failed");
            eprintln!("error: {:#}", e);
            CliExitCode::Failure.into()
        }
    }
}
