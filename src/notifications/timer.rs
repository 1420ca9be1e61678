// SPDX-License-Identifier: MPL-2.0
//! Per-notification auto-dismiss countdown.
//!
//! The timer is a deadline polled on each `Tick`. Rescheduling replaces the
//! deadline and cancelling clears it, so a superseded or cancelled countdown
//! has nothing left to fire.

use std::time::{Duration, Instant};

/// Countdown that fires a single dismissal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DismissTimer {
    enabled: bool,
    timeout: Duration,
    deadline: Option<Instant>,
}

impl DismissTimer {
    /// Creates a timer armed at `now + timeout`.
    ///
    /// A disabled timer still counts down, but elapsing does nothing.
    #[must_use]
    pub fn schedule(enabled: bool, timeout: Duration, now: Instant) -> Self {
        Self {
            enabled,
            timeout,
            deadline: Some(now + timeout),
        }
    }

    /// Replaces the pending countdown when `enabled` or `timeout` changed.
    ///
    /// The new deadline counts from `now`. Returns `true` if the timer was
    /// rescheduled.
    pub fn reschedule(&mut self, enabled: bool, timeout: Duration, now: Instant) -> bool {
        if self.enabled == enabled && self.timeout == timeout {
            return false;
        }
        *self = Self::schedule(enabled, timeout, now);
        true
    }

    /// Cancels the pending countdown, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Checks the deadline.
    ///
    /// Returns `true` exactly once, when an enabled timer has elapsed. The
    /// deadline is consumed on elapse whether or not the timer is enabled.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.enabled
            }
            _ => false,
        }
    }

    /// Returns whether a countdown is still pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns whether elapsing dismisses the notification.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the configured timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
