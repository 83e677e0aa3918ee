use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Time source for the timer loop
///
/// Production uses wall-clock time; tests swap in a clock that only moves
/// when the loop sleeps.
pub trait Clock {
    /// Current time in whole seconds since the Unix epoch
    fn now(&self) -> i64;

    /// Block until the next tick
    fn sleep(&self, duration: Duration);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}
