//! Service context bundling the port trait objects.

use std::sync::Arc;

use tracing::debug;

use crate::adapters::live::{FileStorage, SystemClock, TimestampIdGenerator, UuidIdGenerator};
use crate::adapters::memory::{MemoryStorage, SequentialIdGenerator};
use crate::config::{Config, IdStrategy};
use crate::persistence::{open_store, PersistenceBinding, DEFAULT_SLOT};
use crate::ports::id_gen::IdGenerator;
use crate::ports::storage::Storage;
use crate::state::TaskStore;

/// Bundles the ports a run needs.
///
/// Constructed once at process start and passed by reference to whatever
/// needs to read storage or mint ids.
pub struct ServiceContext {
    /// Slot storage for the task sequence.
    pub storage: Arc<dyn Storage>,
    /// ID generator for new tasks.
    pub id_gen: Box<dyn IdGenerator>,
    /// Slot holding the task sequence.
    pub slot: String,
}

impl ServiceContext {
    /// Creates a live context: file-backed storage under `config.store_dir`
    /// and the configured id strategy.
    #[must_use]
    pub fn live(config: &Config) -> Self {
        let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(&config.store_dir));
        let id_gen: Box<dyn IdGenerator> = match config.id_strategy {
            IdStrategy::Uuid => Box::new(UuidIdGenerator::new()),
            IdStrategy::Timestamp => Box::new(TimestampIdGenerator::new(Box::new(SystemClock))),
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::new()),
        };
        debug!(
            store = %config.store_dir.display(),
            slot = %config.slot,
            ids = %config.id_strategy,
            "live context"
        );
        Self { storage, id_gen, slot: config.slot.clone() }
    }

    /// Creates a context over fresh in-memory storage with sequential ids.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_storage(Arc::new(MemoryStorage::new()))
    }

    /// Creates a context over `storage` with sequential ids and the default slot.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            id_gen: Box::new(SequentialIdGenerator::new()),
            slot: DEFAULT_SLOT.to_string(),
        }
    }

    /// Persistence binding for this context's slot.
    #[must_use]
    pub fn binding(&self) -> PersistenceBinding {
        PersistenceBinding::new(self.storage.clone(), &self.slot)
    }

    /// Opens a store loaded from, and saving to, this context's slot, and
    /// seeds the id generator with the loaded tasks.
    #[must_use]
    pub fn open_store(&self) -> TaskStore {
        let store = open_store(self.binding());
        self.id_gen.seed(store.tasks());
        store
    }
}
