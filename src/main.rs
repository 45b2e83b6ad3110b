//! slot-usage: report meeting time-slot usage across the shared
//! meeting channels.
//!
//! Counts are gathered per fortnight so that weekly meetings (two
//! occurrences per cycle) and alternating meetings (one) stay
//! comparable; a slot is near capacity when its occupancy reaches
//! `2 * channels - sensitivity`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use irc_meetings::error::MeetingError;
use irc_meetings::loader::load_meetings;
use irc_meetings::report::{render_text_report, write_csv};
use irc_meetings::slots::accumulate;
use irc_meetings::types::SlotConfig;

/// Check meeting count time usage
#[derive(Debug, Parser)]
#[command(name = "slot-usage")]
struct Args {
    /// Directory containing meeting YAML files to process
    #[arg(short = 'y', long = "yamldir", default_value = "meetings")]
    yaml_dir: PathBuf,

    /// If specified, write counts to the specified CSV file
    #[arg(long, value_name = "FILE_NAME")]
    csv: Option<PathBuf>,

    /// How close to full a slot must be before it is reported
    #[arg(long, default_value_t = 1)]
    sensitivity: usize,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), MeetingError> {
    let config = SlotConfig::default();
    let meetings = load_meetings(&args.yaml_dir)?;
    let usage = accumulate(&meetings, &config)?;
    if usage.skipped > 0 {
        log::warn!("skipped {} malformed schedule entries", usage.skipped);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_text_report(&mut out, &usage.grid, &config, args.sensitivity)?;

    if let Some(csv_path) = &args.csv {
        writeln!(out)?;
        let written = write_csv(csv_path, &usage.grid)?;
        writeln!(
            out,
            "Created CSV file of meeting slot usage at: {}",
            written.display()
        )?;
    }
    Ok(())
}
