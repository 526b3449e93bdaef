//! Progress poller: a non-blocking periodic tick source.
//!
//! The event loop asks `due` on every iteration and uses `time_until_due` as
//! its input timeout, so a tick is never late by more than one input event.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Poller {
    interval: Duration,
    next_due: Instant,
}

impl Poller {
    /// First tick is due one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a tick fired at `now`. Missed ticks collapse into one.
    pub fn due(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due += self.interval;
        if self.next_due <= now {
            self.next_due = now + self.interval;
        }
        true
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
