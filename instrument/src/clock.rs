//! Monotonic time source for the timing adapters.
//!
//! [`CallLogger`](crate::CallLogger) and [`PerformanceGuard`](crate::PerformanceGuard)
//! read time only through [`Clock`], so tests can script how long a call
//! takes with [`FakeClock`] instead of sleeping.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

pub trait Clock: Clone {
    fn now(&self) -> Instant;

    /// Time since `start`, zero if the clock reads earlier than `start`.
    fn elapsed_since(&self, start: Instant) -> Duration {
        self.now().saturating_duration_since(start)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Frozen at its creation instant until [`FakeClock::advance`] moves it.
///
/// Clones share the offset, so a clone handed to the target operation can
/// "spend" time that the adapter's copy then observes.
#[derive(Debug, Clone)]
pub struct FakeClock {
    origin: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Arc::default(),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        *offset += by;
    }

    /// Total time advanced so far.
    pub fn offset(&self) -> Duration {
        *self.offset.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        self.origin + self.offset()
    }
}
