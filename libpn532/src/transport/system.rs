// libpn532/libpn532/src/transport/system.rs

//! Wall-clock implementation of [`Clock`].

use std::thread;
use std::time::{Duration, Instant};

use crate::transport::Clock;

/// Clock backed by `std::time::Instant`.
///
/// `relax` yields the thread when no poll interval is set, otherwise it
/// sleeps for the interval, so ready polling never spins on a core.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
    poll_interval: Duration,
}

impl SystemClock {
    /// Clock starting at tick 0 now; relax yields.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            poll_interval: Duration::ZERO,
        }
    }

    /// Sleep this long between ready polls instead of yielding.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn delay_ms(&mut self, ms: u32) {
        thread::sleep(Duration::from_millis(u64::from(ms)));
    }

    fn relax(&mut self) {
        if self.poll_interval.is_zero() {
            thread::yield_now();
        } else {
            thread::sleep(self.poll_interval);
        }
    }
}
