//! `tasklist clear` command.

use crate::context::ServiceContext;

/// Execute the `clear` command: drops the whole saved sequence.
///
/// # Errors
///
/// Returns an error string if the storage slot cannot be removed.
pub fn run(ctx: &ServiceContext) -> Result<(), String> {
    ctx.binding().clear()?;
    println!("Cleared all tasks.");
    Ok(())
}
