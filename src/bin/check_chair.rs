//! check-chair: verify that meeting chairs match the canonical
//! `Full Name (ircnick)` format.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use irc_meetings::chair::{all_ok, check_chair, ChairStatus};
use irc_meetings::loader::load_meetings;

#[derive(Debug, Parser)]
#[command(
    name = "check-chair",
    about = "Check that meeting chairs match the canonical format"
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

    let mut all_good = true;
    for meeting in &meetings {
        let statuses = match meeting.chair.as_deref() {
            Some(chair) => check_chair(chair),
            // A meeting without any chair cannot run; flag it too.
            None => vec![ChairStatus {
                chair: "<no chair listed>".to_string(),
                ok: false,
            }],
        };
        if !all_ok(&statuses) {
            all_good = false;
            println!("{}", meeting.filefrom.display());
            for status in &statuses {
                println!(
                    "\t{}: {}",
                    status.chair,
                    if status.ok { "OK" } else { "Needs Fixing" }
                );
            }
        }
    }

    if all_good {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
