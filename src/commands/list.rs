//! `tasklist list` command.

use crate::state::{count_tasks, filter_tasks, group_by_category, TaskStore};
use crate::task::{CategoryFilter, Task};

/// Execute the `list` command.
pub fn run(store: &TaskStore, filter: CategoryFilter) {
    print!("{}", render(store.tasks(), filter));
}

/// Renders the grouped view of `tasks` under `filter`.
#[must_use]
pub fn render(tasks: &[Task], filter: CategoryFilter) -> String {
    let groups = group_by_category(tasks, filter);
    if groups.is_empty() {
        return match filter {
            CategoryFilter::All => "No tasks.\n".to_string(),
            CategoryFilter::Only(category) => format!("No {category} tasks.\n"),
        };
    }

    let id_width = groups
        .iter()
        .flat_map(|(_, group)| group.iter().map(|t| t.id.len()))
        .max()
        .unwrap_or(2);

    let mut lines = Vec::new();
    for (i, (category, group)) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(category.to_string());
        for task in group {
            let mark = if task.completed { 'x' } else { ' ' };
            lines.push(format!("  [{mark}] {:<id_width$}  {}", task.id, task.title));
        }
    }

    let counts = count_tasks(filter_tasks(tasks, filter));
    lines.push(String::new());
    lines.push(format!(
        "{} task(s), {} completed, {} open.",
        counts.total,
        counts.completed,
        counts.open()
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Category;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("1", "Buy milk", Category::Personal).toggled(),
            Task::new("2", "Write report", Category::Work),
        ]
    }

    #[test]
    fn renders_groups_in_display_order() {
        let out = render(&sample(), CategoryFilter::All);
        assert_eq!(
            out,
            "Personal\n  [x] 1  Buy milk\n\nWork\n  [ ] 2  Write report\n\n2 task(s), 1 completed, 1 open.\n"
        );
    }

    #[test]
    fn renders_single_category() {
        let out = render(&sample(), CategoryFilter::Only(Category::Work));
        assert!(out.starts_with("Work\n"));
        assert!(!out.contains("Buy milk"));
        assert!(out.contains("1 task(s), 0 completed, 1 open."));
    }

    #[test]
    fn renders_empty_states() {
        assert_eq!(render(&[], CategoryFilter::All), "No tasks.\n");
        let only_work = vec![Task::new("2", "Write report", Category::Work)];
        assert_eq!(
            render(&only_work, CategoryFilter::Only(Category::Personal)),
            "No Personal tasks.\n"
        );
    }

    #[test]
    fn pads_ids_to_common_width() {
        let tasks = vec![
            Task::new("7", "Short", Category::Work),
            Task::new("1234", "Long", Category::Work),
        ];
        let out = render(&tasks, CategoryFilter::All);
        assert!(out.contains("  [ ] 7     Short\n"));
        assert!(out.contains("  [ ] 1234  Long\n"));
    }
}
