//! Deferred single-shot actions driven by an explicit clock.
//!
//! Nothing here sleeps or spawns. The owner asks the timer whether its
//! deadline has passed by calling [`DebounceTimer::poll`] with the current
//! time, which makes the behavior reproducible under a [`ManualClock`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of monotonic time, measured from the clock's own origin.
pub trait Clock: fmt::Debug {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Starts a clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle while the
/// session owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get().saturating_add(by));
    }

    /// Jumps to an absolute time.
    pub fn set(&self, to: Duration) {
        self.now.set(to);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[derive(Debug, Clone)]
struct Pending<T> {
    deadline: Duration,
    payload: T,
}

/// A single outstanding deferred payload.
///
/// Scheduling while a payload is pending replaces the payload but keeps the
/// original deadline.
#[derive(Debug, Clone)]
pub struct DebounceTimer<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for DebounceTimer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> DebounceTimer<T> {
    /// Creates an idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Arms the timer to fire `delay` after `now`.
    ///
    /// If the timer is already armed this behaves like [`reschedule`](Self::reschedule).
    /// Returns `true` when a new deadline was set.
    pub fn schedule_once(&mut self, now: Duration, delay: Duration, payload: T) -> bool {
        match self.reschedule(payload) {
            Ok(()) => false,
            Err(payload) => {
                self.pending = Some(Pending {
                    deadline: now.saturating_add(delay),
                    payload,
                });
                true
            }
        }
    }

    /// Replaces the pending payload, keeping the deadline.
    ///
    /// # Errors
    ///
    /// Hands the payload back if nothing is pending.
    pub fn reschedule(&mut self, payload: T) -> Result<(), T> {
        match self.pending.as_mut() {
            Some(pending) => {
                pending.payload = payload;
                Ok(())
            }
            None => Err(payload),
        }
    }

    /// Drops the pending payload, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    /// Returns the payload if its deadline is at or before `now`.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        if self.pending.as_ref().is_some_and(|p| now >= p.deadline) {
            self.cancel()
        } else {
            None
        }
    }

    /// Fires immediately, regardless of the deadline.
    pub fn take(&mut self) -> Option<T> {
        self.cancel()
    }

    /// Whether a payload is waiting.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending payload.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Borrows the pending payload.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|p| &p.payload)
    }
}
