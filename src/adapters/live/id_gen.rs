//! Live adapters for the `IdGenerator` port.

use std::sync::Mutex;

use uuid::Uuid;

use crate::ports::{Clock, IdGenerator};

/// Produces random v4 UUIDs.
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    /// Creates a new UUID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UuidIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Produces millisecond timestamps read from a clock, as decimal strings.
///
/// Two ids requested within the same millisecond would collide, so each id
/// is bumped to at least one more than the previous one.
pub struct TimestampIdGenerator {
    clock: Box<dyn Clock>,
    last: Mutex<i64>,
}

impl TimestampIdGenerator {
    /// Creates a generator reading time from `clock`.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>) -> Self {
        Self { clock, last: Mutex::new(i64::MIN) }
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn generate_id(&self) -> String {
        let millis = self.clock.now().timestamp_millis();
        let mut last = self.last.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let next = if millis > *last { millis } else { *last + 1 };
        *last = next;
        next.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::FixedClock;

    #[test]
    fn generates_unique_uuids() {
        let gen = UuidIdGenerator::new();
        let id1 = gen.generate_id();
        let id2 = gen.generate_id();

        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // UUID format: 8-4-4-4-12
    }

    #[test]
    fn timestamp_ids_use_clock_millis() {
        let clock = FixedClock::at_millis(1_700_000_000_000);
        let gen = TimestampIdGenerator::new(Box::new(clock));
        assert_eq!(gen.generate_id(), "1700000000000");
    }

    #[test]
    fn timestamp_ids_stay_unique_within_one_millisecond() {
        let gen = TimestampIdGenerator::new(Box::new(FixedClock::at_millis(5_000)));
        let ids: Vec<String> = (0..3).map(|_| gen.generate_id()).collect();
        assert_eq!(ids, ["5000", "5001", "5002"]);
    }
}
