//! `tasklist apply` command: dispatch an action given in its JSON wire form.

use tracing::info;

use crate::state::{Action, TaskStore};

/// Execute the `apply` command.
///
/// Unknown action kinds are dispatched like any other and leave the tasks
/// unchanged. No title validation happens here; the payload is trusted.
///
/// # Errors
///
/// Returns an error string if the JSON is malformed or saving fails.
pub fn run(store: &mut TaskStore, input: &str) -> Result<(), String> {
    let action = Action::from_json(input)?;
    let kind = action.kind().to_string();
    let unknown = matches!(action, Action::Unknown(_));
    info!(kind = %kind, "applying raw action");
    store.dispatch(action)?;
    if unknown {
        println!("Ignored unknown action {kind}");
    } else {
        println!("Applied {kind}");
    }
    Ok(())
}
