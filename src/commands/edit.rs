//! `tasklist edit` command.

use crate::state::{Action, TaskStore};
use crate::task::{Category, Task};

use super::validate_title;

/// Execute the `edit` command.
///
/// Builds the full replacement from the current task, keeping its id and
/// completion flag, and dispatches it as an edit.
///
/// # Errors
///
/// Returns an error string if nothing would change, the new title is blank,
/// the id is unknown, or saving fails.
pub fn run(
    store: &mut TaskStore,
    id: &str,
    title: Option<&str>,
    category: Option<Category>,
) -> Result<(), String> {
    if title.is_none() && category.is_none() {
        return Err("Nothing to edit: pass --title and/or --category".to_string());
    }
    if let Some(title) = title {
        validate_title(title)?;
    }
    let current = store.get(id).ok_or_else(|| format!("No task with id {id}"))?;
    let replacement = Task {
        title: title.map_or_else(|| current.title.clone(), str::to_string),
        category: category.unwrap_or(current.category),
        ..current.clone()
    };

    store.dispatch(Action::Edit(replacement.clone()))?;
    println!("Updated {id}: {} [{}]", replacement.title, replacement.category);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ServiceContext;

    fn store_with_milk() -> TaskStore {
        let ctx = ServiceContext::in_memory();
        let mut store = ctx.open_store();
        store.dispatch(Action::Add(Task::new("1", "Buy milk", Category::Personal))).unwrap();
        store.dispatch(Action::ToggleComplete("1".into())).unwrap();
        store
    }

    #[test]
    fn changes_title_and_keeps_completion() {
        let mut store = store_with_milk();
        run(&mut store, "1", Some("Buy oat milk"), None).unwrap();

        let task = &store.tasks()[0];
        assert_eq!(task.title, "Buy oat milk");
        assert_eq!(task.category, Category::Personal);
        assert!(task.completed);
    }

    #[test]
    fn changes_category_only() {
        let mut store = store_with_milk();
        run(&mut store, "1", None, Some(Category::Work)).unwrap();
        assert_eq!(store.tasks()[0].category, Category::Work);
        assert_eq!(store.tasks()[0].title, "Buy milk");
    }

    #[test]
    fn blank_title_rejected() {
        let mut store = store_with_milk();
        assert_eq!(run(&mut store, "1", Some(""), None).unwrap_err(), "Title is required");
        assert_eq!(store.tasks()[0].title, "Buy milk");
    }

    #[test]
    fn unknown_id_rejected() {
        let mut store = store_with_milk();
        let err = run(&mut store, "9", Some("Other"), None).unwrap_err();
        assert!(err.contains("No task with id 9"));
    }

    #[test]
    fn requires_a_change() {
        let mut store = store_with_milk();
        assert!(run(&mut store, "1", None, None).is_err());
    }
}
