//! Time source used when stamping cause and donation records.

use chrono::{DateTime, Utc};

/// Source of `created_at` / `updated_at` timestamps. Repositories take a
/// `Clock` handle instead of calling `Utc::now()` directly, so tests can
/// pin or step time.
pub trait Clock: Send + Sync {
    /// The current reading.
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock of the host. Used everywhere outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
