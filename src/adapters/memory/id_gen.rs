//! Counter-based `IdGenerator`.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ports::IdGenerator;
use crate::task::Task;

/// Yields "1", "2", "3", ... in order.
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id is "1".
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Creates a generator whose first id is `first`.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: AtomicU64::new(first) }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> String {
        self.next.fetch_add(1, Ordering::Relaxed).to_string()
    }

    /// Moves the counter past the largest numeric id in `existing`; never
    /// moves it backwards. Non-numeric ids are ignored.
    fn seed(&self, existing: &[Task]) {
        let last = existing.iter().filter_map(|t| t.id.parse::<u64>().ok()).max().unwrap_or(0);
        self.next.fetch_max(last.saturating_add(1), Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_from_one() {
        let gen = SequentialIdGenerator::new();
        assert_eq!(gen.generate_id(), "1");
        assert_eq!(gen.generate_id(), "2");
    }

    #[test]
    fn custom_start() {
        let gen = SequentialIdGenerator::starting_at(10);
        assert_eq!(gen.generate_id(), "10");
    }

    #[test]
    fn seed_skips_past_existing_numeric_ids() {
        use crate::task::Category;

        let tasks = vec![
            Task::new("3", "Three", Category::Work),
            Task::new("abc", "Named", Category::Work),
            Task::new("12", "Twelve", Category::Personal),
        ];
        let gen = SequentialIdGenerator::new();
        gen.seed(&tasks);
        assert_eq!(gen.generate_id(), "13");

        let empty = SequentialIdGenerator::new();
        empty.seed(&[]);
        assert_eq!(empty.generate_id(), "1");
    }

    #[test]
    fn seed_never_moves_backwards() {
        use crate::task::Category;

        let gen = SequentialIdGenerator::starting_at(20);
        gen.seed(&[Task::new("4", "Four", Category::Work)]);
        assert_eq!(gen.generate_id(), "20");
    }
}
