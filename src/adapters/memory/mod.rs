//! In-memory adapters with deterministic behavior.

pub mod clock;
pub mod id_gen;
pub mod storage;

pub use clock::FixedClock;
pub use id_gen::SequentialIdGenerator;
pub use storage::MemoryStorage;
