//! Cooperative timers polled from the main loop.
//!
//! Nothing here spawns threads or sleeps. The event loop asks each timer
//! for its deadline, waits for input until the earliest one, then polls.

use std::time::{Duration, Instant};

/// Fixed-period repeating timer.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    /// First fire is one `period` after `start`.
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next: start + period,
        }
    }

    /// Ticker firing `per_second` times a second (at least once).
    pub fn per_second(per_second: u32, start: Instant) -> Self {
        Self::new(Duration::from_secs(1) / per_second.max(1), start)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Instant of the next fire.
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Restart the period from `now`.
    pub fn reset(&mut self, now: Instant) {
        self.next = now + self.period;
    }

    /// Returns true at most once per elapsed period. Periods missed while
    /// the loop was busy are dropped rather than replayed.
    pub fn fire(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
        true
    }
}

/// Something that hands out animation frames, in the manner of a display
/// refresh callback.
pub trait FrameSource {
    /// Consume the pending frame if one is due at `now`.
    fn take_frame(&mut self, now: Instant) -> bool;

    /// When the next frame becomes due.
    fn next_frame(&self) -> Instant;
}

impl FrameSource for Ticker {
    fn take_frame(&mut self, now: Instant) -> bool {
        self.fire(now)
    }

    fn next_frame(&self) -> Instant {
        self.deadline()
    }
}

/// One-shot cancellable deadline.
///
/// Scheduling while a deadline is pending replaces it, so at most one
/// action is ever outstanding.
#[derive(Debug, Clone, Default)]
pub struct DelayedAction {
    deadline: Option<Instant>,
}

impl DelayedAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the action to run `delay` after `now`. Returns true when a
    /// pending deadline was cancelled in the process.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> bool {
        self.deadline.replace(now + delay).is_some()
    }

    /// Drop the pending deadline. Returns true when one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn take_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Earliest of the given deadlines.
pub fn next_wakeup<I>(deadlines: I) -> Option<Instant>
where
    I: IntoIterator<Item = Option<Instant>>,
{
    deadlines.into_iter().flatten().min()
}
