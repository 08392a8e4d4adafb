//! Live adapters for real external interactions.

pub mod clock;
pub mod id_gen;
pub mod storage;

pub use clock::SystemClock;
pub use id_gen::{TimestampIdGenerator, UuidIdGenerator};
pub use storage::FileStorage;
