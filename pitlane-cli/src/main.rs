//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use pitlane_cli::CliError;

fn main() {
    match pitlane_cli::run() {
        Ok(()) => {}
        // Clap renders help, version and usage errors itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("pitlane: {err}");
            std::process::exit(1);
        }
    }
}
