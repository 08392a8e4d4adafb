//! Persistence binding: loads the task sequence at start and saves it after
//! every dispatch.
//!
//! The whole sequence lives in a single storage slot as a JSON array:
//!
//! ```text
//! [{"id":"1","title":"Buy milk","category":"Personal","completed":false}, ...]
//! ```
//!
//! There is no version field; a layout change needs an external migration.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::ports::Storage;
use crate::state::{TaskObserver, TaskStore};
use crate::task::Task;

/// Default slot name holding the task sequence.
pub const DEFAULT_SLOT: &str = "tasks";

/// Bridges a [`TaskStore`] to a [`Storage`] slot.
#[derive(Clone)]
pub struct PersistenceBinding {
    storage: Arc<dyn Storage>,
    slot: String,
}

impl PersistenceBinding {
    /// Creates a binding that reads and writes `slot` in `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, slot: &str) -> Self {
        Self { storage, slot: slot.to_string() }
    }

    /// Name of the slot this binding uses.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Loads the last saved sequence.
    ///
    /// An absent slot, a read failure or an unparseable value all yield an
    /// empty sequence; this never fails. An unparseable value is first copied
    /// to the backup slot (see [`PersistenceBinding::backup_slot`]) so the
    /// next save does not destroy it.
    #[must_use]
    pub fn load(&self) -> Vec<Task> {
        let contents = match self.storage.get_item(&self.slot) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!(slot = %self.slot, "no saved tasks");
                return Vec::new();
            }
            Err(e) => {
                warn!(slot = %self.slot, error = %e, "failed to read saved tasks, starting empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Task>>(&contents) {
            Ok(tasks) => {
                debug!(slot = %self.slot, count = tasks.len(), "loaded tasks");
                tasks
            }
            Err(e) => {
                let backup = self.backup_slot();
                warn!(slot = %self.slot, %backup, error = %e, "saved tasks are corrupt, starting empty");
                if let Err(e) = self.storage.set_item(&backup, &contents) {
                    warn!(slot = %backup, error = %e, "failed to back up corrupt tasks");
                }
                Vec::new()
            }
        }
    }

    /// Slot that receives an unparseable value found by [`PersistenceBinding::load`].
    #[must_use]
    pub fn backup_slot(&self) -> String {
        format!("{}.corrupt", self.slot)
    }

    /// Serializes `tasks` and overwrites the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails. There is
    /// no retry.
    pub fn save(&self, tasks: &[Task]) -> Result<(), String> {
        let json = serde_json::to_string(tasks)
            .map_err(|e| format!("Failed to serialize tasks: {e}"))?;
        self.storage
            .set_item(&self.slot, &json)
            .map_err(|e| format!("Failed to save tasks to slot '{}': {e}", self.slot))
    }

    /// Removes the slot entirely; the next load starts empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be modified.
    pub fn clear(&self) -> Result<(), String> {
        self.storage
            .remove_item(&self.slot)
            .map_err(|e| format!("Failed to clear slot '{}': {e}", self.slot))
    }
}

impl TaskObserver for PersistenceBinding {
    fn tasks_changed(&self, tasks: &[Task]) -> Result<(), String> {
        self.save(tasks)
    }
}

/// Builds a store initialized from `binding` and subscribes the binding to it.
#[must_use]
pub fn open_store(binding: PersistenceBinding) -> TaskStore {
    let mut store = TaskStore::new(binding.load());
    store.subscribe(Box::new(binding));
    store
}
