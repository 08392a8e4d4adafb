//! Read-side projections over the task sequence. Nothing here mutates.

use crate::task::{Category, CategoryFilter, Task};

/// Tasks that pass `filter`, in insertion order.
#[must_use]
pub fn filter_tasks(tasks: &[Task], filter: CategoryFilter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t.category)).collect()
}

/// Tasks grouped under each category `filter` shows, in display order.
///
/// Empty groups are omitted. Tasks inside a group keep insertion order.
#[must_use]
pub fn group_by_category(tasks: &[Task], filter: CategoryFilter) -> Vec<(Category, Vec<&Task>)> {
    filter
        .categories()
        .into_iter()
        .filter_map(|category| {
            let group: Vec<&Task> = tasks.iter().filter(|t| t.category == category).collect();
            (!group.is_empty()).then_some((category, group))
        })
        .collect()
}

/// Completion summary for a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Number of tasks.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
}

impl TaskCounts {
    /// Number of tasks not yet completed.
    #[must_use]
    pub fn open(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}

/// Counts total and completed tasks.
#[must_use]
pub fn count_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> TaskCounts {
    tasks.into_iter().fold(TaskCounts::default(), |mut counts, task| {
        counts.total += 1;
        if task.completed {
            counts.completed += 1;
        }
        counts
    })
}
