//! `tasklist add` command.

use crate::context::ServiceContext;
use crate::state::{Action, TaskStore};
use crate::task::{Category, Task};

use super::validate_title;

/// Execute the `add` command.
///
/// Mints a fresh id from the context's generator and appends the task.
///
/// # Errors
///
/// Returns an error string if the title is blank or saving fails.
pub fn run(
    store: &mut TaskStore,
    ctx: &ServiceContext,
    title: &str,
    category: Category,
) -> Result<(), String> {
    validate_title(title)?;
    let task = Task::new(ctx.id_gen.generate_id(), title, category);
    let id = task.id.clone();
    store.dispatch(Action::Add(task))?;
    println!("Added {id}: {title} [{category}]");
    Ok(())
}
