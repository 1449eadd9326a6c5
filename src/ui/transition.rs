//! Delayed content swap for the list region.
//!
//! While entering, the old content stays on screen (dimmed) and the new
//! content is built when the timer fires. A new request always cancels the
//! pending one; a transitioning request re-arms it from now.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Transition {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Transition {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Enter the "entering" state, replacing any pending swap.
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_entering(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True exactly once, when the delay has elapsed. Clears the marker.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
