//! Settling timer for search input.

use std::time::{Duration, Instant};

/// Delay the dashboard waits after the last keystroke before filtering.
pub const SEARCH_SETTLE_DELAY: Duration = Duration::from_millis(300);

/// Holds back a changing value until it has stopped changing for `delay`.
///
/// The caller owns the clock: every call takes `now`, so the debouncer can
/// be driven from an event loop, a timer task, or a test without sleeping.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
    settled: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            settled: None,
        }
    }

    /// Debouncer with an initial settled value.
    pub fn with_value(delay: Duration, value: T) -> Self {
        Self {
            delay,
            pending: None,
            settled: Some(value),
        }
    }

    /// Record raw input. Restarts the settling period.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// When the pending value will settle, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.delay)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Promote the pending value once the delay has passed.
    ///
    /// Returns the newly settled value, or `None` if nothing settled on this
    /// call. Only a `Some` return should trigger re-evaluation.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        let due = self.deadline().is_some_and(|deadline| now >= deadline);
        if !due {
            return None;
        }
        self.settled = self.pending.take().map(|(value, _)| value);
        self.settled.as_ref()
    }

    /// Last value that made it through.
    pub fn settled(&self) -> Option<&T> {
        self.settled.as_ref()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_SETTLE_DELAY)
    }
}
