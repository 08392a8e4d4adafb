//! `tasklist toggle` command.

use crate::state::{Action, TaskStore};

/// Execute the `toggle` command.
///
/// An unknown id is reported but is not an error; the action is still
/// dispatched so the slot is rewritten as usual.
///
/// # Errors
///
/// Returns an error string if saving fails.
pub fn run(store: &mut TaskStore, id: &str) -> Result<(), String> {
    store.dispatch(Action::ToggleComplete(id.to_string()))?;
    match store.get(id) {
        Some(task) if task.completed => println!("Completed {id}: {}", task.title),
        Some(task) => println!("Reopened {id}: {}", task.title),
        None => println!("No task with id {id}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ServiceContext;
    use crate::task::{Category, Task};

    #[test]
    fn toggles_back_and_forth() {
        let ctx = ServiceContext::in_memory();
        let mut store = ctx.open_store();
        store.dispatch(Action::Add(Task::new("1", "Buy milk", Category::Personal))).unwrap();

        run(&mut store, "1").unwrap();
        assert!(store.tasks()[0].completed);

        run(&mut store, "1").unwrap();
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn unknown_id_is_ok() {
        let ctx = ServiceContext::in_memory();
        let mut store = ctx.open_store();
        assert!(run(&mut store, "404").is_ok());
        assert!(store.tasks().is_empty());
    }
}
