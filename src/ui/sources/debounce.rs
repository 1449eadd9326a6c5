use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
enum DebounceState<T> {
    Idle,
    Armed { deadline: Instant, value: T },
}

/// Quiet-period debouncer.
///
/// `Idle → Armed { deadline } → fired (Idle)`. Every push re-arms with the
/// newest value, so a burst yields only its last value, one window after the
/// last push. Time is passed in by the caller.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    state: DebounceState<T>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            state: DebounceState::Idle,
        }
    }

    pub fn push(&mut self, value: T, now: Instant) {
        self.state = DebounceState::Armed {
            deadline: now + self.window,
            value,
        };
    }

    /// Take the value once the quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.state {
            DebounceState::Armed { deadline, .. } if now >= *deadline => {}
            _ => return None,
        }
        match std::mem::replace(&mut self.state, DebounceState::Idle) {
            DebounceState::Armed { value, .. } => Some(value),
            DebounceState::Idle => None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        match &self.state {
            DebounceState::Armed { deadline, .. } => Some(*deadline),
            DebounceState::Idle => None,
        }
    }
}
