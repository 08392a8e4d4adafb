//! The pure state-transition function.

use super::action::Action;
use crate::task::Task;

/// Computes the task sequence that results from applying `action` to `tasks`.
///
/// The input is never modified. Actions that target an id not present in
/// `tasks`, and unknown actions, return an equal copy of the input. Add
/// appends without checking for duplicate ids.
#[must_use]
pub fn reduce(tasks: &[Task], action: Action) -> Vec<Task> {
    match action {
        Action::Add(task) => {
            let mut next = Vec::with_capacity(tasks.len() + 1);
            next.extend_from_slice(tasks);
            next.push(task);
            next
        }
        Action::Delete(id) => tasks.iter().filter(|t| t.id != id).cloned().collect(),
        Action::ToggleComplete(id) => tasks
            .iter()
            .map(|t| if t.id == id { t.toggled() } else { t.clone() })
            .collect(),
        Action::Edit(replacement) => tasks
            .iter()
            .map(|t| if t.id == replacement.id { replacement.clone() } else { t.clone() })
            .collect(),
        Action::Unknown(_) => tasks.to_vec(),
    }
}
