// SPDX-License-Identifier: MPL-2.0
//! A mounted notification: its dismiss timer and its transition.
//!
//! Controllers outlive their store record. Once a notification is removed
//! from the store, its controller keeps the record while the exit
//! transition plays, and is dropped when the transition reaches `Exited`.

use super::id::NotificationId;
use super::record::Notification;
use super::timer::DismissTimer;
use super::transition::{Transition, TransitionState};
use std::time::{Duration, Instant};

/// What happened to a controller during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Phase reached during this tick, if any.
    pub phase: Option<TransitionState>,
    /// Whether the auto-dismiss timer fired.
    pub dismiss: bool,
}

/// Timer and transition for one mounted notification.
#[derive(Debug, Clone)]
pub struct Controller<C> {
    id: NotificationId,
    timer: DismissTimer,
    transition: Transition,
    /// The record, kept once it has left the store so exit can still render it.
    departed: Option<Notification<C>>,
}

impl<C> Controller<C> {
    /// Mounts a notification in the `Entering` phase with its timer armed.
    #[must_use]
    pub fn mount(
        id: NotificationId,
        auto_dismiss: bool,
        timeout: Duration,
        transition_duration: Duration,
        now: Instant,
    ) -> Self {
        Self {
            id,
            timer: DismissTimer::schedule(auto_dismiss, timeout, now),
            transition: Transition::appear(transition_duration, now),
            departed: None,
        }
    }

    /// Returns the notification ID.
    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    /// Returns the current transition phase.
    #[must_use]
    pub fn state(&self) -> TransitionState {
        self.transition.state()
    }

    /// Returns the transition.
    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    /// Returns the dismiss timer.
    #[must_use]
    pub fn timer(&self) -> &DismissTimer {
        &self.timer
    }

    /// Returns the record held after removal from the store.
    #[must_use]
    pub fn departed(&self) -> Option<&Notification<C>> {
        self.departed.as_ref()
    }

    /// Returns whether the notification has been removed from the store.
    #[must_use]
    pub fn is_leaving(&self) -> bool {
        self.transition.state().is_leaving()
    }

    /// Returns whether a tick could still change this controller.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.transition.is_settled() || self.timer.is_pending()
    }

    /// Reschedules the dismiss timer. Leaving controllers are left alone.
    pub fn reschedule(&mut self, auto_dismiss: bool, timeout: Duration, now: Instant) -> bool {
        if self.is_leaving() {
            return false;
        }
        self.timer.reschedule(auto_dismiss, timeout, now)
    }

    /// Starts the exit transition and cancels the dismiss timer.
    ///
    /// `record` is the store record that was just removed, if any.
    pub fn depart(&mut self, record: Option<Notification<C>>, now: Instant) -> bool {
        self.timer.cancel();
        if record.is_some() {
            self.departed = record;
        }
        self.transition.exit(now)
    }

    /// Advances the transition and polls the timer.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let phase = self.transition.advance(now);
        let dismiss = !self.is_leaving() && self.timer.poll(now);
        TickOutcome { phase, dismiss }
    }
}
