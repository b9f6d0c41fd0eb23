//! Deadline timers driven by an explicit millisecond clock.
//!
//! # Invariants
//!
//! 1. A deadline never fires after `cancel()`: cancellation happens before
//!    the cancelling gesture completes, so observers polling afterwards see
//!    no pending timer.
//! 2. `is_due` is monotone in `now`: once due, a deadline stays due until
//!    cancelled or taken.
//!
//! There is no background timer thread. The host calls `poll(now_ms)` on
//! whatever cadence it has (animation frame, tick loop, test step) and the
//! deadline answers from the explicit clock only.

/// A single pending timer, armed at an absolute millisecond timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline {
    due_at_ms: Option<u64>,
}

impl Deadline {
    /// A deadline with no pending timer.
    #[must_use]
    pub const fn idle() -> Self {
        Self { due_at_ms: None }
    }

    /// Arm the deadline `delay_ms` after `now_ms`, replacing any pending one.
    pub fn arm(&mut self, now_ms: u64, delay_ms: u64) {
        self.due_at_ms = Some(now_ms.saturating_add(delay_ms));
    }

    /// Cancel any pending timer.
    pub fn cancel(&mut self) {
        self.due_at_ms = None;
    }

    /// Whether a timer is armed and not yet fired.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.due_at_ms.is_some()
    }

    /// Whether the armed timer has reached its due time.
    #[must_use]
    pub fn is_due(&self, now_ms: u64) -> bool {
        self.due_at_ms.is_some_and(|due| now_ms >= due)
    }

    /// Consume the timer if due, returning whether it fired.
    ///
    /// After a `true` return the deadline is idle again, so a single armed
    /// timer fires at most once.
    pub fn fire_if_due(&mut self, now_ms: u64) -> bool {
        if self.is_due(now_ms) {
            self.due_at_ms = None;
            true
        } else {
            false
        }
    }
}
