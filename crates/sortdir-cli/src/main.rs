mod cli;

use crate::cli::Cli;

fn main() {
    // Logging is initialized inside, once the config file (which may name a log file) is read.
    if let Err(err) = Cli::run_from_args() {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}
