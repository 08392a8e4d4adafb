//! Port implementations.
//!
//! - `live`: real disk, random UUIDs, system clock.
//! - `memory`: in-process stand-ins with deterministic behavior.

pub mod live;
pub mod memory;
