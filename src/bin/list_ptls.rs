//! list-ptls: print a courtesy-ping line for project PTLs, built from
//! the governance project roster.

use std::process::ExitCode;

use clap::Parser;

use irc_meetings::error::MeetingError;
use irc_meetings::ptl::{fetch_roster, ping_lines, ptl_nicks, PING_LINE_WIDTH, PROJECTS_LIST_URL};

#[derive(Debug, Parser)]
#[command(name = "list-ptls", about = "Print a courtesy ping for project PTLs")]
struct Args {
    /// A URL pointing to a projects.yaml file
    #[arg(long = "project-list", default_value = PROJECTS_LIST_URL)]
    project_list: String,

    /// Ping message
    #[arg(short = 'm', long = "msg", default_value = "courtesy ping for")]
    msg: String,

    /// Projects to include, defaults to all
    project: Vec<String>,
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
    let roster = fetch_roster(&args.project_list)?;
    let nicks = ptl_nicks(&roster, &args.project)?;
    for line in ping_lines(&args.msg, &nicks, PING_LINE_WIDTH) {
        println!("{}", line);
    }
    Ok(())
}
