// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] pairs an identifier with opaque, caller-defined
//! content. [`Options`] carries the optional per-notification settings
//! accepted by `add`.

use super::id::NotificationId;
use std::time::Duration;

/// Optional settings supplied when adding a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Explicit identifier. A random one is generated when absent.
    pub id: Option<NotificationId>,
    /// Enter/exit duration for this notification only.
    pub transition_duration: Option<Duration>,
    /// Auto-dismiss timeout for this notification only.
    pub auto_dismiss_timeout: Option<Duration>,
}

impl Options {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit identifier.
    #[must_use]
    pub fn id(mut self, id: impl Into<NotificationId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Overrides the provider's transition duration for this notification.
    #[must_use]
    pub fn transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration = Some(duration);
        self
    }

    /// Overrides the provider's auto-dismiss timeout for this notification.
    ///
    /// Useful for notifications that need more time to read.
    #[must_use]
    pub fn auto_dismiss_timeout(mut self, timeout: Duration) -> Self {
        self.auto_dismiss_timeout = Some(timeout);
        self
    }
}

/// A notification held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification<C> {
    id: NotificationId,
    content: C,
    options: Options,
}

impl<C> Notification<C> {
    /// Creates a record. The resolved `id` wins over `options.id`.
    pub(crate) fn new(id: NotificationId, content: C, options: Options) -> Self {
        Self {
            id,
            content,
            options,
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    /// Returns the caller-defined content.
    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Returns the options the notification was added with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the per-notification transition duration, if any.
    #[must_use]
    pub fn transition_duration(&self) -> Option<Duration> {
        self.options.transition_duration
    }

    /// Returns the per-notification auto-dismiss timeout, if any.
    #[must_use]
    pub fn auto_dismiss_timeout(&self) -> Option<Duration> {
        self.options.auto_dismiss_timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_builder_pattern_works() {
        let options = Options::new()
            .id("saved")
            .transition_duration(Duration::from_millis(300))
            .auto_dismiss_timeout(Duration::from_secs(10));

        assert_eq!(options.id, Some(NotificationId::from("saved")));
        assert_eq!(options.transition_duration, Some(Duration::from_millis(300)));
        assert_eq!(options.auto_dismiss_timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn record_exposes_options() {
        let record = Notification::new(
            NotificationId::from("a"),
            "hello",
            Options::new().transition_duration(Duration::from_millis(50)),
        );

        assert_eq!(record.id().as_str(), "a");
        assert_eq!(*record.content(), "hello");
        assert_eq!(record.transition_duration(), Some(Duration::from_millis(50)));
        assert!(record.auto_dismiss_timeout().is_none());
    }
}
