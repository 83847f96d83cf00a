//! Frame clock.

use std::time::Instant;

/// Source of real elapsed time between frames.
pub trait Clock {
    /// Milliseconds since the previous call (or since creation on the first call).
    fn elapsed_ms(&mut self) -> u32;
}

/// Wall-clock implementation backed by [`Instant`].
#[derive(Debug)]
pub struct SystemClock {
    last: Instant,
    /// Sub-millisecond remainder carried into the next call
    carry_us: u128,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            carry_us: 0,
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_ms(&mut self) -> u32 {
        let now = Instant::now();
        let us = now.duration_since(self.last).as_micros() + self.carry_us;
        self.last = now;
        self.carry_us = us % 1000;
        u32::try_from(us / 1000).unwrap_or(u32::MAX)
    }
}
