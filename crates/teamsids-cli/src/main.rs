use teamsids_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; run without it if that fails.
    if let Err(err) = logging::init_logging() {
        eprintln!("teamsids: logging disabled: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("teamsids error: {:#}", err);
        std::process::exit(1);
    }
}
