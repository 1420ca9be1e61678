// SPDX-License-Identifier: MPL-2.0
//! Presentation boundary.
//!
//! The provider does not draw anything itself. It hands each mounted
//! notification to a [`NotificationComponent`] and wraps the results in a
//! [`ContainerComponent`]. Both are supplied by the caller; see
//! [`DefaultToast`](super::toast::DefaultToast) and
//! [`DefaultContainer`](super::container::DefaultContainer) for ready-made ones.

use crate::notifications::{Message, NotificationId, TransitionState};
use iced::Element;
use std::time::Duration;

/// Everything a notification component may read while rendering.
#[derive(Debug)]
pub struct NotificationProps<'a, C> {
    /// Identifier of the rendered notification.
    pub id: &'a NotificationId,
    /// Caller-defined content.
    pub content: &'a C,
    /// Current transition phase.
    pub transition_state: TransitionState,
    /// Length of one enter or exit phase.
    pub transition_duration: Duration,
    /// Fraction of the current phase already elapsed, in `0.0..=1.0`.
    pub progress: f32,
    /// Message to publish when the user dismisses the notification.
    pub on_dismiss: Message,
}

impl<C> NotificationProps<'_, C> {
    /// Visibility in `0.0..=1.0` derived from the phase and its progress.
    ///
    /// Fades in while entering and out while exiting.
    #[must_use]
    pub fn visibility(&self) -> f32 {
        let progress = self.progress.clamp(0.0, 1.0);
        match self.transition_state {
            TransitionState::Entering => progress,
            TransitionState::Entered => 1.0,
            TransitionState::Exiting => 1.0 - progress,
            TransitionState::Exited => 0.0,
        }
    }
}

/// Renders one notification.
pub trait NotificationComponent<C> {
    fn view<'a>(&'a self, props: NotificationProps<'a, C>) -> Element<'a, Message>;
}

/// Positions the rendered notifications inside the overlay.
///
/// Always rendered, with no children when nothing is mounted or the host
/// cannot mount an overlay.
pub trait ContainerComponent {
    fn view<'a>(&'a self, children: Vec<Element<'a, Message>>) -> Element<'a, Message>;
}

impl<C, F> NotificationComponent<C> for F
where
    F: for<'a> Fn(NotificationProps<'a, C>) -> Element<'a, Message>,
{
    fn view<'a>(&'a self, props: NotificationProps<'a, C>) -> Element<'a, Message> {
        self(props)
    }
}
