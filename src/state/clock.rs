//! Time source for notification deadlines.

use std::time::Instant;

/// Monotonic time source.
///
/// Production code uses [`SystemClock`]; tests swap in a manually advanced
/// clock so expiry can be checked without sleeping.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Wall-clock [`Clock`] backed by `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
