use std::time::{Duration, Instant};

use super::debounce::Debouncer;
use crate::ui::finder::FinderIntent;

/// Text-change events on the search input, debounced into `Search`.
#[derive(Debug)]
pub struct SearchStream {
    debouncer: Debouncer<String>,
}

impl SearchStream {
    pub fn new(window: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(window),
        }
    }

    /// Record one text change. `value` is the input's content after it.
    pub fn on_input(&mut self, value: &str, now: Instant) {
        self.debouncer.push(value.to_string(), now);
    }

    pub fn poll(&mut self, now: Instant) -> Option<FinderIntent> {
        self.debouncer.poll(now).map(FinderIntent::Search)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }
}
