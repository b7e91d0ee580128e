use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use raidtracker_parser::{parse_checked_with, parse_with};
use raidtracker_types::{Result, errors::ApplicationError, report::Report};

mod config;
mod logs;

use config::Config;
use logs::setup_logging;

/// Parses a Travian attack report, as copied from the game, into JSON.
#[derive(Debug, Parser)]
#[command(name = "raidtracker", version, about)]
struct Args {
    /// Report text file. Reads stdin when missing or `-`.
    path: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Parse even when the Attacker, Defender or Statistics markers are missing.
    #[arg(long)]
    no_validate: bool,

    /// Fields a unit header row needs, overrides RAIDTRACKER_MIN_UNIT_COLUMNS.
    #[arg(long, value_name = "N")]
    min_unit_columns: Option<usize>,
}

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from_env();
    let _guard = setup_logging(&config);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "Report not parsed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let mut options = config.parse_options.clone();
    if let Some(columns) = args.min_unit_columns {
        if columns == 0 {
            return Err(ApplicationError::Config(
                "--min-unit-columns must be at least 1".to_string(),
            ));
        }
        options = options.with_min_unit_columns(columns);
    }

    let text = read_input(args.path.as_deref())?;
    let report = if args.no_validate {
        parse_with(&text, &options)
    } else {
        parse_checked_with(&text, &options)?
    };
    log_summary(&report);

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn log_summary(report: &Report) {
    tracing::info!(
        attacker = report.attacker.player.as_deref().unwrap_or("?"),
        defenders = report.defenders.len(),
        attacker_lost = report.attacker.total_lost(),
        defenders_lost = report.defenders_total_lost(),
        "Parsed attack report"
    );
    if let Some(bounty) = &report.attacker.bounty {
        tracing::info!(
            carried = bounty.total.unwrap_or_else(|| bounty.resources_sum()),
            capacity = bounty.capacity,
            "Bounty"
        );
    }
}
