// src/api/debounce.rs
//! Trailing-edge coalescing of rapid input.

use std::time::Duration;

/// Holds the latest pushed value until the input has been quiet for `wait`.
///
/// Time is supplied by the caller as an offset from any fixed epoch, which
/// keeps this usable both natively and from a browser clock.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Duration)>,
}

impl<T> Debouncer<T> {
    pub const fn new(wait: Duration) -> Self {
        Self { wait, pending: None }
    }

    /// Replaces any pending value and restarts the quiet period.
    pub fn push(&mut self, value: T, now: Duration) {
        self.pending = Some((value, now));
    }

    /// Releases the pending value once `wait` has elapsed since the last push.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        let ready = self
            .pending
            .as_ref()
            .is_some_and(|(_, pushed_at)| now.saturating_sub(*pushed_at) >= self.wait);
        if ready {
            self.flush()
        } else {
            None
        }
    }

    /// Releases the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes ready, if there is one.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|(_, pushed_at)| pushed_at.saturating_add(self.wait))
    }
}
