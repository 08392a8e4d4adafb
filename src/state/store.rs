//! The owning task store and its change-notification contract.

use tracing::{debug, warn};

use super::action::Action;
use super::reducer::reduce;
use crate::task::Task;

/// Receives the full task sequence after every dispatch.
pub trait TaskObserver: Send + Sync {
    /// Called with the sequence the store now holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the observer could not process the change (for
    /// example a storage write failed). The store's state is not rolled back.
    fn tasks_changed(&self, tasks: &[Task]) -> Result<(), String>;
}

/// Owner of the canonical task sequence.
///
/// Mutation goes through [`TaskStore::dispatch`] only; `&mut self` there
/// keeps dispatches strictly one at a time.
#[derive(Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    observers: Vec<Box<dyn TaskObserver>>,
}

impl TaskStore {
    /// Creates a store holding `initial`, with no observers.
    #[must_use]
    pub fn new(initial: Vec<Task>) -> Self {
        Self { tasks: initial, observers: Vec::new() }
    }

    /// The current task sequence, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Registers an observer. Observers are notified in subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn TaskObserver>) {
        self.observers.push(observer);
    }

    /// Applies `action` and notifies every observer, including when the
    /// action left the sequence unchanged.
    ///
    /// # Errors
    ///
    /// Returns the first observer error. Every observer is still notified
    /// and the new sequence stays in place.
    pub fn dispatch(&mut self, action: Action) -> Result<(), String> {
        let kind = action.kind().to_string();
        let next = reduce(&self.tasks, action);
        if next == self.tasks {
            debug!(%kind, "dispatch left tasks unchanged");
        } else {
            debug!(%kind, before = self.tasks.len(), after = next.len(), "dispatch");
        }
        self.tasks = next;

        let mut first_error = None;
        for observer in &self.observers {
            if let Err(e) = observer.tasks_changed(&self.tasks) {
                warn!(error = %e, "task observer failed");
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::task::Category;

    /// Captures every notification for inspection.
    struct Recorder {
        seen: Arc<Mutex<Vec<Vec<Task>>>>,
    }

    impl TaskObserver for Recorder {
        fn tasks_changed(&self, tasks: &[Task]) -> Result<(), String> {
            self.seen.lock().unwrap().push(tasks.to_vec());
            Ok(())
        }
    }

    struct Failing;

    impl TaskObserver for Failing {
        fn tasks_changed(&self, _tasks: &[Task]) -> Result<(), String> {
            Err("disk full".into())
        }
    }

    fn recording_store() -> (TaskStore, Arc<Mutex<Vec<Vec<Task>>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = TaskStore::default();
        store.subscribe(Box::new(Recorder { seen: Arc::clone(&seen) }));
        (store, seen)
    }

    #[test]
    fn dispatch_updates_state_and_notifies() {
        let (mut store, seen) = recording_store();
        let task = Task::new("1", "Buy milk", Category::Personal);

        store.dispatch(Action::Add(task.clone())).unwrap();

        assert_eq!(store.tasks(), &[task.clone()]);
        assert_eq!(*seen.lock().unwrap(), vec![vec![task]]);
    }

    #[test]
    fn noop_dispatch_still_notifies() {
        let (mut store, seen) = recording_store();
        store.dispatch(Action::Delete("missing".into())).unwrap();
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn observer_error_is_returned_but_state_is_kept() {
        let (mut store, seen) = recording_store();
        store.subscribe(Box::new(Failing));
        let task = Task::new("1", "Buy milk", Category::Personal);

        let err = store.dispatch(Action::Add(task.clone())).unwrap_err();

        assert_eq!(err, "disk full");
        assert_eq!(store.tasks(), &[task]);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn get_finds_by_id() {
        let store = TaskStore::new(vec![Task::new("a", "Alpha", Category::Work)]);
        assert_eq!(store.get("a").map(|t| t.title.as_str()), Some("Alpha"));
        assert!(store.get("b").is_none());
    }
}
