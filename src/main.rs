//! Binary entrypoint for the `tasklist` CLI.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TASKLIST_LOG=debug`.
const LOG_VAR: &str = "TASKLIST_LOG";

fn setup_logging() {
    // Logs go to stderr so list output on stdout stays clean.
    let filter = EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn main() -> ExitCode {
    setup_logging();
    match tasklist::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
