//! Tick scheduling.
//!
//! The engine owns a single logical [`TickTimer`]. Re-arming it always
//! replaces the previous schedule, so two tick streams can never overlap.
//! [`TickClock`] is the wall-clock side that the main loop polls.

use std::time::{Duration, Instant};

/// Logical timer handle: armed with an interval or cancelled.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TickTimer {
    interval: Option<Duration>,
    generation: u64,
}

impl TickTimer {
    /// Cancels any current schedule and arms a new one at `interval`.
    pub fn arm(&mut self, interval: Duration) {
        self.cancel();
        self.interval = Some(interval);
        self.generation += 1;
    }

    /// Stops the schedule. A cancelled timer never fires.
    pub fn cancel(&mut self) {
        self.interval = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    #[must_use]
    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Bumped on every `arm`; lets the clock notice a replaced schedule.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Turns a [`TickTimer`] into tick events against real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickClock {
    generation: u64,
    next_due: Option<Instant>,
}

impl TickClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when a tick is due at `now`.
    ///
    /// A freshly armed schedule starts its first period at `now`. After a
    /// tick fires the next period is measured from `now`, so a stalled loop
    /// catches up with one tick rather than a burst.
    pub fn poll(&mut self, timer: &TickTimer, now: Instant) -> bool {
        let Some(interval) = timer.interval() else {
            self.next_due = None;
            return false;
        };

        if timer.generation() != self.generation || self.next_due.is_none() {
            self.generation = timer.generation();
            self.next_due = Some(now + interval);
            return false;
        }

        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + interval);
                true
            }
            _ => false,
        }
    }
}
