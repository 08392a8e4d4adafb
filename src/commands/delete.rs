//! `tasklist delete` command.

use crate::state::{Action, TaskStore};

/// Execute the `delete` command. Deletion is permanent.
///
/// # Errors
///
/// Returns an error string if saving fails.
pub fn run(store: &mut TaskStore, id: &str) -> Result<(), String> {
    let existed = store.get(id).is_some();
    store.dispatch(Action::Delete(id.to_string()))?;
    if existed {
        println!("Deleted {id}");
    } else {
        println!("No task with id {id}");
    }
    Ok(())
}
