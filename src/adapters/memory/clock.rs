//! A clock frozen at one instant.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// Always reports the same time.
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock stuck at `at`.
    #[must_use]
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    /// Creates a clock stuck at `millis` since the Unix epoch.
    ///
    /// Out-of-range values fall back to the epoch.
    #[must_use]
    pub fn at_millis(millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(millis).unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_fixed_instant() {
        let clock = FixedClock::at_millis(1_000);
        assert_eq!(clock.now().timestamp_millis(), 1_000);
        assert_eq!(clock.now(), clock.now());
    }
}
