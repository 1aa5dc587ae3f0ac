//! Time source for record timestamps.
//!
//! Stores take the clock as an explicit dependency instead of calling
//! `Utc::now()` directly, so tests can pin and advance time.

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// Source of the current time.
pub trait Clock: Send + Sync {
    /// Current time as `DateTime<Utc>`
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock that moves forward by a fixed step on every read.
#[derive(Debug)]
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl SteppingClock {
    /// Start at `start`, advancing by `step` after each `now()`
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            current: Mutex::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        // A poisoned lock still holds a valid timestamp
        let mut current = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let now = *current;
        *current = now + self.step;
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stepping_clock_advances() {
        let start = Utc::now();
        let clock = SteppingClock::new(start, Duration::seconds(1));

        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start + Duration::seconds(1));
        assert!(clock.now() > start + Duration::seconds(1));
    }
}
