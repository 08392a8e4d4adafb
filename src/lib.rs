//! Core library entry for the `tasklist` CLI.
//!
//! The task sequence is owned by a [`state::TaskStore`]; every change goes
//! through [`state::reduce`] and is saved by a
//! [`persistence::PersistenceBinding`] subscribed to the store.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod persistence;
pub mod ports;
pub mod state;
pub mod task;

use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Config;
use crate::context::ServiceContext;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing, configuration or command
/// execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    let config = Config::from_env()?.with_store_dir(cli.store.clone());
    let ctx = ServiceContext::live(&config);
    commands::dispatch(&cli.command, &ctx)
}
