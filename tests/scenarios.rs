//! End-to-end reducer and persistence scenarios through the public API.

use std::sync::Arc;

use tasklist::adapters::memory::MemoryStorage;
use tasklist::persistence::{open_store, PersistenceBinding, DEFAULT_SLOT};
use tasklist::state::{reduce, Action};
use tasklist::task::{Category, Task};

fn milk() -> Task {
    Task::new("1", "Buy milk", Category::Personal)
}

fn report() -> Task {
    Task::new("2", "Write report", Category::Work)
}

fn after_toggle() -> Vec<Task> {
    let tasks = reduce(&[], Action::Add(milk()));
    let tasks = reduce(&tasks, Action::Add(report()));
    reduce(&tasks, Action::ToggleComplete("1".into()))
}

#[test]
fn add_add_toggle() {
    let tasks = after_toggle();
    assert_eq!(tasks, vec![Task { completed: true, ..milk() }, report()]);
}

#[test]
fn then_delete() {
    let tasks = reduce(&after_toggle(), Action::Delete("2".into()));
    assert_eq!(tasks, vec![Task { completed: true, ..milk() }]);
}

#[test]
fn then_edit_is_full_replace() {
    let tasks = reduce(&after_toggle(), Action::Delete("2".into()));
    let replacement = Task {
        id: "1".into(),
        title: "Buy oat milk".into(),
        category: Category::Personal,
        completed: true,
    };
    let tasks = reduce(&tasks, Action::Edit(replacement.clone()));
    assert_eq!(tasks, vec![replacement]);
}

#[test]
fn empty_title_is_stored_when_dispatched_directly() {
    // Title validation belongs to the front end; the core stores what it is given.
    let tasks = reduce(&[], Action::Add(Task::new("1", "", Category::Work)));
    assert_eq!(tasks[0].title, "");
}

#[test]
fn store_survives_restart() {
    let storage = Arc::new(MemoryStorage::new());
    {
        let mut store = open_store(PersistenceBinding::new(storage.clone(), DEFAULT_SLOT));
        store.dispatch(Action::Add(milk())).unwrap();
        store.dispatch(Action::Add(report())).unwrap();
        store.dispatch(Action::ToggleComplete("1".into())).unwrap();
    }

    let store = open_store(PersistenceBinding::new(storage, DEFAULT_SLOT));
    assert_eq!(store.tasks(), after_toggle().as_slice());
}
