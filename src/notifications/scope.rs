// SPDX-License-Identifier: MPL-2.0
//! Scoped access to a provider's notification stack.
//!
//! Code that shows notifications receives the provider explicitly. A
//! component built without one gets [`Error::OutsideProvider`] from
//! [`use_notifications`] on every call.

use super::id::NotificationId;
use super::provider::Provider;
use super::record::{Notification, Options};
use crate::error::{Error, Result};

/// Stack operations borrowed from a [`Provider`].
#[derive(Debug)]
pub struct Notifications<'a, C> {
    provider: &'a mut Provider<C>,
}

impl<'a, C> Notifications<'a, C> {
    pub(crate) fn new(provider: &'a mut Provider<C>) -> Self {
        Self { provider }
    }

    /// Adds a notification. Returns `None` if the ID is already in use.
    pub fn add_notification(&mut self, content: C, options: Options) -> Option<NotificationId> {
        self.provider.add(content, options)
    }

    /// Removes a notification. Absent IDs are ignored.
    pub fn remove_notification(&mut self, id: &NotificationId) -> bool {
        self.provider.remove(id)
    }

    /// Removes every notification.
    pub fn remove_all_notifications(&mut self) {
        self.provider.remove_all();
    }

    /// Returns the current stack, oldest first.
    #[must_use]
    pub fn notification_stack(&self) -> &[Notification<C>] {
        self.provider.notifications()
    }
}

/// Borrows the stack operations of the provider in `scope`.
///
/// # Errors
///
/// Returns [`Error::OutsideProvider`] when `scope` is `None`.
pub fn use_notifications<C>(scope: Option<&mut Provider<C>>) -> Result<Notifications<'_, C>> {
    scope.map(Notifications::new).ok_or(Error::OutsideProvider)
}
