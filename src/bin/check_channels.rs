//! check-channels: verify that the IRC channel each meeting happens in
//! is capable of running a fully functional MeetBot.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use irc_meetings::channels::{find_unknown_channels, meetbot_channels};
use irc_meetings::loader::load_meetings;

#[derive(Debug, Parser)]
#[command(
    name = "check-channels",
    about = "Check that meeting IRC channels can run a fully functional MeetBot"
)]
struct Args {
    /// Directory containing YAML to process
    #[arg(short = 'y', long = "yamldir")]
    yaml_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let meetings = match load_meetings(&args.yaml_dir) {
        Ok(meetings) => meetings,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let allowed = meetbot_channels();
    let allowed_list = allowed
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let violations = find_unknown_channels(&meetings, &allowed);
    for violation in &violations {
        eprintln!(
            "{}: IRC channel: {} not in ({})",
            violation.filefrom.display(),
            violation.channel,
            allowed_list
        );
    }

    if violations.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
