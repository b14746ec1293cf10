//! Trailing-edge debounce driven by host-passed instants.
//!
//! The toolkit runs on a cooperative loop with no background timers, so
//! the debounce holds a deadline and the host asks about it: `poke` on
//! every input, `fire` on every tick, act when `fire` reports true.

use std::time::{Duration, Instant};

/// A resettable trailing-edge timer.
///
/// Each [`Debounce::poke`] pushes the deadline out by the full delay;
/// [`Debounce::fire`] reports true exactly once per settled burst.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arm (or re-arm) the timer: the deadline becomes `now + delay`.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Whether the delay has elapsed since the last poke. Consumes the
    /// deadline, so a settled burst fires once.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Whether a poke is waiting to fire.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}
