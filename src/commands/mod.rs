//! Command dispatch and handlers.
//!
//! Handlers play the front-end role: they validate input, build actions,
//! dispatch them into the store and print the result. The store itself
//! never validates.

pub mod add;
pub mod apply;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod list;
pub mod toggle;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// # Errors
///
/// Returns an error string if validation fails or the selected handler fails.
pub fn dispatch(command: &Command, ctx: &ServiceContext) -> Result<(), String> {
    let mut store = ctx.open_store();
    match command {
        Command::Add { title, category } => add::run(&mut store, ctx, title, *category),
        Command::List { category } => {
            list::run(&store, *category);
            Ok(())
        }
        Command::Toggle { id } => toggle::run(&mut store, id),
        Command::Edit { id, title, category } => {
            edit::run(&mut store, id, title.as_deref(), *category)
        }
        Command::Delete { id } => delete::run(&mut store, id),
        Command::Apply { action } => apply::run(&mut store, action),
        Command::Clear => clear::run(ctx),
    }
}

/// Rejects titles that are empty or only whitespace.
///
/// # Errors
///
/// Returns "Title is required" for a blank title.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    Ok(())
}
