//! Test clocks — deterministic `Clock` implementations.

use std::sync::Mutex;

use causeway_core::clock::Clock;
use chrono::{DateTime, Duration, Utc};

/// A clock that always returns a fixed point in time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A clock that advances by one second on every reading. Useful where
/// records need distinct, ordered timestamps.
#[derive(Debug)]
pub struct StepClock {
    next: Mutex<DateTime<Utc>>,
}

impl StepClock {
    /// Creates a clock whose first reading is `start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().expect("step clock mutex poisoned");
        let current = *next;
        *next += Duration::seconds(1);
        current
    }
}
