//! Port traits defining external boundaries.
//!
//! Each trait is a boundary between the task core and something outside it
//! (durable storage, id generation, time). Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod id_gen;
pub mod storage;

pub use clock::Clock;
pub use id_gen::IdGenerator;
pub use storage::{Storage, StorageError};
