// SPDX-License-Identifier: MPL-2.0
//! Enter/exit transition phases.
//!
//! Each mounted notification runs its own [`Transition`]: it appears in
//! [`TransitionState::Entering`], settles in `Entered` after the duration,
//! and on removal runs `Exiting` for the same duration before reaching
//! `Exited`, at which point it is unmounted.

use std::time::{Duration, Instant};

/// Animation phase of a mounted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionState {
    Entering,
    Entered,
    Exiting,
    Exited,
}

impl TransitionState {
    /// Returns whether the notification is still part of the rendered overlay.
    #[must_use]
    pub fn is_mounted(self) -> bool {
        !matches!(self, TransitionState::Exited)
    }

    /// Returns whether the notification is on its way out.
    #[must_use]
    pub fn is_leaving(self) -> bool {
        matches!(self, TransitionState::Exiting | TransitionState::Exited)
    }
}

/// Phase machine for one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    state: TransitionState,
    duration: Duration,
    since: Instant,
}

impl Transition {
    /// Starts a transition in the `Entering` phase.
    #[must_use]
    pub fn appear(duration: Duration, now: Instant) -> Self {
        Self {
            state: TransitionState::Entering,
            duration,
            since: now,
        }
    }

    /// Advances `Entering → Entered` or `Exiting → Exited` once the
    /// duration has elapsed. Returns the new phase when one was reached.
    pub fn advance(&mut self, now: Instant) -> Option<TransitionState> {
        let next = match self.state {
            TransitionState::Entering => TransitionState::Entered,
            TransitionState::Exiting => TransitionState::Exited,
            TransitionState::Entered | TransitionState::Exited => return None,
        };

        if now.saturating_duration_since(self.since) < self.duration {
            return None;
        }

        self.state = next;
        self.since = now;
        Some(next)
    }

    /// Starts the exit phase.
    ///
    /// Returns `false` if the transition was already exiting or exited.
    pub fn exit(&mut self, now: Instant) -> bool {
        if self.state.is_leaving() {
            return false;
        }
        self.state = TransitionState::Exiting;
        self.since = now;
        true
    }

    /// Returns the current phase.
    #[must_use]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Returns the phase duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns whether no phase change is pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        matches!(
            self.state,
            TransitionState::Entered | TransitionState::Exited
        )
    }

    /// Returns how far through the current phase the transition is, in `0.0..=1.0`.
    ///
    /// Settled phases report `1.0`. Components use this to interpolate opacity
    /// or offset.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.is_settled() || self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.since);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}
