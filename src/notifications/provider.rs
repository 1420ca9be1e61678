// SPDX-License-Identifier: MPL-2.0
//! Notification provider: the composition root of the notification system.
//!
//! The `Provider` owns the [`Store`] and a [`Controller`] for every mounted
//! notification. Callers mutate the stack only through `add`, `remove` and
//! `remove_all`, feed it `Message`s from the overlay and the tick
//! subscription, and render it with `view`.
//!
//! Removal is immediate in the store. The rendered entry lingers in the
//! `Exiting` phase for the transition duration before it is unmounted.

use super::controller::Controller;
use super::id::NotificationId;
use super::record::{Notification, Options};
use super::scope::Notifications;
use super::store::Store;
use super::transition::TransitionState;
use crate::config::{Config, TICK_INTERVAL_MS};
use crate::ui::{
    ContainerComponent, DefaultContainer, DefaultToast, Host, NotificationComponent,
    NotificationProps,
};
use iced::widget::Stack;
use iced::{time, Element, Length, Subscription};
use std::fmt;
use std::fmt::Display;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Advance transitions and check auto-dismiss timers.
    Tick(Instant),
}

/// Lifecycle changes reported by [`Provider::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The notification finished its enter transition.
    Entered(NotificationId),
    /// The user dismissed the notification.
    Dismissed(NotificationId),
    /// The auto-dismiss timer removed the notification.
    AutoDismissed(NotificationId),
    /// The exit transition finished and the notification left the overlay.
    Unmounted(NotificationId),
}

/// Provider-wide behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Whether notifications dismiss themselves.
    pub auto_dismiss: bool,
    /// Time before a notification dismisses itself.
    pub auto_dismiss_timeout: Duration,
    /// Length of each enter and exit transition.
    pub transition_duration: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Self {
            auto_dismiss: config.auto_dismiss(),
            auto_dismiss_timeout: config.dismiss_timeout().as_duration(),
            transition_duration: config.transition_duration().as_duration(),
        }
    }
}

/// A mounted notification as the overlay sees it.
#[derive(Debug, Clone, Copy)]
pub struct Mounted<'a, C> {
    /// The record, or its departed copy while exiting.
    pub notification: &'a Notification<C>,
    /// Current transition phase.
    pub state: TransitionState,
    /// Length of one enter or exit phase for this entry.
    pub transition_duration: Duration,
}

/// Owns the notification stack and renders it as an overlay.
pub struct Provider<C> {
    settings: Settings,
    store: Store<C>,
    /// Rendered entries in display order, including ones still exiting.
    mounted: Vec<Controller<C>>,
    host: Host,
    container: Box<dyn ContainerComponent>,
    component: Box<dyn NotificationComponent<C>>,
    /// Latest time seen by the provider; transitions render against it.
    now: Instant,
}

impl<C> fmt::Debug for Provider<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("settings", &self.settings)
            .field("stack_len", &self.store.len())
            .field("mounted_len", &self.mounted.len())
            .field("host", &self.host)
            .finish()
    }
}

impl<C: Display + 'static> Default for Provider<C> {
    fn default() -> Self {
        Self::with_defaults(Settings::default())
    }
}

impl<C: Display + 'static> Provider<C> {
    /// Creates a provider rendering through [`DefaultContainer`] and [`DefaultToast`].
    #[must_use]
    pub fn with_defaults(settings: Settings) -> Self {
        Self::new(settings, DefaultContainer::default(), DefaultToast::default())
    }
}

impl<C> Provider<C> {
    /// Creates a provider with caller-supplied components.
    ///
    /// The host is detected from the environment; override it with [`Provider::with_host`].
    pub fn new(
        settings: Settings,
        container: impl ContainerComponent + 'static,
        component: impl NotificationComponent<C> + 'static,
    ) -> Self {
        Self {
            settings,
            store: Store::new(),
            mounted: Vec::new(),
            host: Host::detect(),
            container: Box::new(container),
            component: Box::new(component),
            now: Instant::now(),
        }
    }

    /// Creates a provider configured from a loaded [`Config`].
    pub fn from_config(
        config: &Config,
        container: impl ContainerComponent + 'static,
        component: impl NotificationComponent<C> + 'static,
    ) -> Self {
        Self::new(Settings::from(config), container, component)
    }

    /// Overrides host detection.
    #[must_use]
    pub fn with_host(mut self, host: Host) -> Self {
        self.host = host;
        self
    }

    // =========================================================================
    // Stack Operations
    // =========================================================================

    /// Adds a notification and returns its ID.
    ///
    /// Returns `None` if a notification with the requested ID is already in
    /// the stack. The stack is left unchanged in that case.
    pub fn add(&mut self, content: C, options: Options) -> Option<NotificationId> {
        self.add_at(content, options, Instant::now())
    }

    /// Same as [`Provider::add`], at an explicit time.
    pub fn add_at(&mut self, content: C, options: Options, now: Instant) -> Option<NotificationId> {
        self.observe(now);

        let transition_duration = options
            .transition_duration
            .unwrap_or(self.settings.transition_duration);
        let timeout = options
            .auto_dismiss_timeout
            .unwrap_or(self.settings.auto_dismiss_timeout);
        let requested = options.id.clone();

        let Some(id) = self.store.add(content, options) else {
            debug!(id = ?requested, "notification already exists, ignoring add");
            return None;
        };

        let controller = Controller::mount(
            id.clone(),
            self.settings.auto_dismiss,
            timeout,
            transition_duration,
            now,
        );

        // An entry with this ID may still be exiting; the new one takes its place.
        match self.mounted.iter().position(|c| c.id() == &id) {
            Some(pos) => self.mounted[pos] = controller,
            None => self.mounted.push(controller),
        }

        debug!(%id, stack_len = self.store.len(), "notification added");
        Some(id)
    }

    /// Removes a notification and starts its exit transition.
    ///
    /// Returns `false` if no notification had this ID.
    pub fn remove(&mut self, id: &NotificationId) -> bool {
        self.remove_at(id, Instant::now())
    }

    /// Same as [`Provider::remove`], at an explicit time.
    pub fn remove_at(&mut self, id: &NotificationId, now: Instant) -> bool {
        self.observe(now);

        let Some(record) = self.store.remove(id) else {
            return false;
        };

        if let Some(controller) = self
            .mounted
            .iter_mut()
            .find(|c| c.id() == id && !c.is_leaving())
        {
            controller.depart(Some(record), now);
        }

        debug!(%id, stack_len = self.store.len(), "notification removed");
        true
    }

    /// Removes every notification, one at a time.
    pub fn remove_all(&mut self) {
        self.remove_all_at(Instant::now());
    }

    /// Same as [`Provider::remove_all`], at an explicit time.
    pub fn remove_all_at(&mut self, now: Instant) {
        if self.store.is_empty() {
            return;
        }

        let ids: Vec<NotificationId> = self.store.ids().cloned().collect();
        debug!(count = ids.len(), "removing all notifications");
        for id in &ids {
            self.remove_at(id, now);
        }
    }

    /// Returns whether a notification with this ID is in the stack.
    #[must_use]
    pub fn has(&self, id: &NotificationId) -> bool {
        self.store.has(id)
    }

    /// Returns the current stack, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification<C>] {
        self.store.as_slice()
    }

    /// Returns a handle exposing the stack operations.
    pub fn notifications_handle(&mut self) -> Notifications<'_, C> {
        Notifications::new(self)
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// Returns the provider-wide settings.
    #[must_use]
    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Returns the host the overlay renders into.
    #[must_use]
    pub fn host(&self) -> Host {
        self.host
    }

    /// Enables or disables auto-dismiss, rescheduling every live timer.
    pub fn set_auto_dismiss(&mut self, enabled: bool) {
        self.set_auto_dismiss_at(enabled, Instant::now());
    }

    /// Same as [`Provider::set_auto_dismiss`], at an explicit time.
    pub fn set_auto_dismiss_at(&mut self, enabled: bool, now: Instant) {
        self.settings.auto_dismiss = enabled;
        self.reschedule_timers(now);
    }

    /// Changes the auto-dismiss timeout, rescheduling every live timer.
    ///
    /// Notifications added with their own timeout keep it.
    pub fn set_auto_dismiss_timeout(&mut self, timeout: Duration) {
        self.set_auto_dismiss_timeout_at(timeout, Instant::now());
    }

    /// Same as [`Provider::set_auto_dismiss_timeout`], at an explicit time.
    pub fn set_auto_dismiss_timeout_at(&mut self, timeout: Duration, now: Instant) {
        self.settings.auto_dismiss_timeout = timeout;
        self.reschedule_timers(now);
    }

    /// Changes the transition duration used by notifications added from now on.
    pub fn set_transition_duration(&mut self, duration: Duration) {
        self.settings.transition_duration = duration;
    }

    fn reschedule_timers(&mut self, now: Instant) {
        self.observe(now);

        let enabled = self.settings.auto_dismiss;
        for controller in &mut self.mounted {
            let timeout = self
                .store
                .get(controller.id())
                .and_then(Notification::auto_dismiss_timeout)
                .unwrap_or(self.settings.auto_dismiss_timeout);

            if controller.reschedule(enabled, timeout, now) {
                trace!(id = %controller.id(), ?timeout, enabled, "dismiss timer rescheduled");
            }
        }
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Handles a notification message, returning the lifecycle events it caused.
    pub fn update(&mut self, message: Message) -> Vec<Event> {
        match message {
            Message::Dismiss(id) => {
                if self.remove(&id) {
                    vec![Event::Dismissed(id)]
                } else {
                    Vec::new()
                }
            }
            Message::Tick(now) => self.tick(now),
        }
    }

    /// Advances every transition and fires elapsed dismiss timers.
    pub fn tick(&mut self, now: Instant) -> Vec<Event> {
        self.observe(now);

        let mut events = Vec::new();
        let mut expired = Vec::new();

        for controller in &mut self.mounted {
            let outcome = controller.tick(now);
            if let Some(phase) = outcome.phase {
                trace!(id = %controller.id(), ?phase, "transition phase reached");
                if phase == TransitionState::Entered {
                    events.push(Event::Entered(controller.id().clone()));
                }
            }
            if outcome.dismiss {
                expired.push(controller.id().clone());
            }
        }

        for id in expired {
            // The record may already be gone; removing it again is a no-op.
            if self.remove_at(&id, now) {
                debug!(%id, "notification auto-dismissed");
                events.push(Event::AutoDismissed(id));
            }
        }

        self.mounted.retain(|controller| {
            if controller.state() == TransitionState::Exited {
                debug!(id = %controller.id(), "notification unmounted");
                events.push(Event::Unmounted(controller.id().clone()));
                false
            } else {
                true
            }
        });

        events
    }

    fn observe(&mut self, now: Instant) {
        self.now = self.now.max(now);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Returns the rendered entries in display order, including exiting ones.
    pub fn mounted(&self) -> impl Iterator<Item = Mounted<'_, C>> {
        self.mounted.iter().filter_map(move |controller| {
            let notification = self.record_for(controller)?;
            Some(Mounted {
                notification,
                state: controller.state(),
                transition_duration: controller.transition().duration(),
            })
        })
    }

    /// Returns whether anything is rendered.
    #[must_use]
    pub fn has_mounted(&self) -> bool {
        !self.mounted.is_empty()
    }

    /// Returns whether a tick could change anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.mounted.iter().any(Controller::is_active)
    }

    /// Periodic tick while any timer or transition is pending.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_active() {
            time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Renders the overlay: every mounted notification inside the container.
    ///
    /// Without a mountable host the container is rendered empty.
    pub fn overlay(&self) -> Element<'_, Message> {
        if !self.host.can_mount() {
            return self.container.view(Vec::new());
        }

        let children = self
            .mounted
            .iter()
            .filter_map(|controller| {
                let notification = self.record_for(controller)?;
                let transition = controller.transition();
                Some(self.component.view(NotificationProps {
                    id: controller.id(),
                    content: notification.content(),
                    transition_state: transition.state(),
                    transition_duration: transition.duration(),
                    progress: transition.progress(self.now),
                    on_dismiss: Message::Dismiss(controller.id().clone()),
                }))
            })
            .collect();

        self.container.view(children)
    }

    /// Layers the overlay above `content`.
    ///
    /// `on_message` lifts notification messages into the application's message type.
    pub fn view<'a, M: 'a>(
        &'a self,
        content: impl Into<Element<'a, M>>,
        on_message: impl Fn(Message) -> M + 'a,
    ) -> Element<'a, M> {
        Stack::with_children([content.into(), self.overlay().map(on_message)])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn record_for<'a>(&'a self, controller: &'a Controller<C>) -> Option<&'a Notification<C>> {
        if controller.is_leaving() {
            controller.departed()
        } else {
            self.store.get(controller.id())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::Column;
    use std::cell::Cell;
    use std::rc::Rc;

    const TIMEOUT: Duration = Duration::from_millis(5000);
    const TRANSITION: Duration = Duration::from_millis(200);

    fn settings(auto_dismiss: bool) -> Settings {
        Settings {
            auto_dismiss,
            auto_dismiss_timeout: TIMEOUT,
            transition_duration: TRANSITION,
        }
    }

    fn provider(auto_dismiss: bool) -> Provider<String> {
        Provider::with_defaults(settings(auto_dismiss)).with_host(Host::Window)
    }

    fn mounted_states(provider: &Provider<String>) -> Vec<(String, TransitionState)> {
        provider
            .mounted()
            .map(|m| (m.notification.id().to_string(), m.state))
            .collect()
    }

    #[test]
    fn new_provider_is_empty_and_idle() {
        let provider = provider(true);
        assert!(provider.notifications().is_empty());
        assert!(!provider.has_mounted());
        assert!(!provider.is_active());
    }

    #[test]
    fn add_mounts_entering_notification() {
        let mut provider = provider(true);
        let id = provider
            .add_at("hello".to_string(), Options::new(), Instant::now())
            .expect("id");

        assert_eq!(provider.notifications().len(), 1);
        assert_eq!(
            mounted_states(&provider),
            vec![(id.to_string(), TransitionState::Entering)]
        );
        assert!(provider.is_active());
    }

    #[test]
    fn duplicate_add_returns_none_and_mounts_nothing() {
        let mut provider = provider(true);
        let now = Instant::now();
        let id = provider.add_at("hello".into(), Options::new(), now).expect("id");

        let dup = provider.add_at("world".into(), Options::new().id(id.clone()), now);
        assert!(dup.is_none());
        assert_eq!(provider.notifications().len(), 1);
        assert_eq!(provider.notifications()[0].content(), "hello");
        assert_eq!(provider.mounted().count(), 1);
    }

    #[test]
    fn tick_reports_entered() {
        let mut provider = provider(true);
        let start = Instant::now();
        let id = provider.add_at("a".into(), Options::new(), start).expect("id");

        assert!(provider.tick(start + Duration::from_millis(100)).is_empty());
        assert_eq!(provider.tick(start + TRANSITION), vec![Event::Entered(id)]);
    }

    #[test]
    fn remove_is_immediate_in_store_and_delayed_in_overlay() {
        let mut provider = provider(true);
        let start = Instant::now();
        let id = provider.add_at("a".into(), Options::new().id("a"), start).expect("id");
        provider.tick(start + TRANSITION);

        let removed_at = start + Duration::from_secs(1);
        assert!(provider.remove_at(&id, removed_at));
        assert!(provider.notifications().is_empty());
        assert_eq!(
            mounted_states(&provider),
            vec![("a".to_string(), TransitionState::Exiting)]
        );

        assert!(provider.tick(removed_at + Duration::from_millis(150)).is_empty());
        assert_eq!(
            provider.tick(removed_at + TRANSITION),
            vec![Event::Unmounted(id)]
        );
        assert!(!provider.has_mounted());
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut provider = provider(true);
        provider.add("a".into(), Options::new().id("a"));

        assert!(!provider.remove(&NotificationId::from("b")));
        assert_eq!(provider.notifications().len(), 1);
    }

    #[test]
    fn dismiss_message_removes_and_reports() {
        let mut provider = provider(true);
        let id = provider.add("a".into(), Options::new()).expect("id");

        let events = provider.update(Message::Dismiss(id.clone()));
        assert_eq!(events, vec![Event::Dismissed(id.clone())]);
        assert!(provider.update(Message::Dismiss(id)).is_empty());
    }

    #[test]
    fn auto_dismiss_fires_at_timeout() {
        let mut provider = provider(true);
        let start = Instant::now();
        let id = provider.add_at("a".into(), Options::new(), start).expect("id");

        provider.tick(start + Duration::from_millis(4999));
        assert!(provider.has(&id));

        let events = provider.tick(start + TIMEOUT);
        assert_eq!(events, vec![Event::AutoDismissed(id.clone())]);
        assert!(!provider.has(&id));
    }

    #[test]
    fn disabled_auto_dismiss_never_removes() {
        let mut provider = provider(false);
        let start = Instant::now();
        let id = provider.add_at("a".into(), Options::new(), start).expect("id");

        for secs in [1, 5, 10, 60, 3600] {
            provider.tick(start + Duration::from_secs(secs));
        }
        assert!(provider.has(&id));
        assert!(!provider.is_active());
    }

    #[test]
    fn per_notification_timeout_overrides_provider() {
        let mut provider = provider(true);
        let start = Instant::now();
        let quick = provider
            .add_at("quick".into(), Options::new().auto_dismiss_timeout(Duration::from_secs(1)), start)
            .expect("quick");
        let normal = provider.add_at("normal".into(), Options::new(), start).expect("normal");

        let events = provider.tick(start + Duration::from_secs(1));
        assert!(events.contains(&Event::AutoDismissed(quick)));
        assert!(provider.has(&normal));
    }

    #[test]
    fn changing_timeout_supersedes_pending_timer() {
        let mut provider = provider(true);
        let start = Instant::now();
        let id = provider.add_at("a".into(), Options::new(), start).expect("id");

        provider.set_auto_dismiss_timeout_at(Duration::from_millis(1000), start);

        let mut dismissals = 0;
        for ms in (0..=6000).step_by(50) {
            let events = provider.tick(start + Duration::from_millis(ms));
            dismissals += events
                .iter()
                .filter(|e| matches!(e, Event::AutoDismissed(_)))
                .count();
            if ms < 1000 {
                assert!(provider.has(&id), "removed early at {ms}ms");
            }
        }
        assert_eq!(dismissals, 1);
        assert!(!provider.has(&id));
    }

    #[test]
    fn disabling_auto_dismiss_mid_flight_cancels_removal() {
        let mut provider = provider(true);
        let start = Instant::now();
        let id = provider.add_at("a".into(), Options::new(), start).expect("id");

        provider.set_auto_dismiss_at(false, start + Duration::from_secs(2));
        provider.tick(start + Duration::from_secs(30));
        assert!(provider.has(&id));
    }

    #[test]
    fn remove_all_exits_everything() {
        let mut provider = provider(true);
        let start = Instant::now();
        for name in ["a", "b", "c"] {
            provider.add_at(name.into(), Options::new().id(name), start);
        }

        provider.remove_all_at(start + Duration::from_millis(10));
        assert!(provider.notifications().is_empty());
        assert!(mounted_states(&provider)
            .iter()
            .all(|(_, state)| *state == TransitionState::Exiting));

        let events = provider.tick(start + Duration::from_secs(10));
        let unmounted = events
            .iter()
            .filter(|e| matches!(e, Event::Unmounted(_)))
            .count();
        assert_eq!(unmounted, 3);
        assert!(!events.iter().any(|e| matches!(e, Event::AutoDismissed(_))));

        provider.remove_all();
        assert!(provider.notifications().is_empty());
    }

    #[test]
    fn readding_exiting_id_remounts_in_place() {
        let mut provider = provider(true);
        let start = Instant::now();
        provider.add_at("a".into(), Options::new().id("a"), start);
        provider.add_at("b".into(), Options::new().id("b"), start);
        provider.remove_at(&NotificationId::from("a"), start);

        let again = provider.add_at("a2".into(), Options::new().id("a"), start + Duration::from_millis(50));
        assert_eq!(again, Some(NotificationId::from("a")));
        assert_eq!(
            mounted_states(&provider),
            vec![
                ("a".to_string(), TransitionState::Entering),
                ("b".to_string(), TransitionState::Entering),
            ]
        );
        assert_eq!(provider.mounted().next().map(|m| m.notification.content().as_str()), Some("a2"));
    }

    #[test]
    fn exiting_entries_keep_rendering_their_content() {
        let mut provider = provider(true);
        let start = Instant::now();
        let id = provider.add_at("bye".into(), Options::new(), start).expect("id");
        provider.remove_at(&id, start);

        let mounted: Vec<_> = provider.mounted().collect();
        assert_eq!(mounted.len(), 1);
        assert_eq!(mounted[0].notification.content(), "bye");
    }

    #[test]
    fn per_notification_transition_duration_is_used() {
        let mut provider = provider(true);
        let start = Instant::now();
        let slow = Duration::from_millis(800);
        let id = provider
            .add_at("slow".into(), Options::new().transition_duration(slow), start)
            .expect("id");

        assert_eq!(provider.mounted().next().map(|m| m.transition_duration), Some(slow));
        assert!(provider.tick(start + TRANSITION).is_empty());
        assert_eq!(provider.tick(start + slow), vec![Event::Entered(id)]);
    }

    /// Container that remembers how many children it was last given.
    #[derive(Default)]
    struct CountingContainer {
        children: Rc<Cell<Option<usize>>>,
    }

    impl ContainerComponent for CountingContainer {
        fn view<'a>(&'a self, children: Vec<Element<'a, Message>>) -> Element<'a, Message> {
            self.children.set(Some(children.len()));
            Column::with_children(children).into()
        }
    }

    fn counted_children(host: Host) -> Option<usize> {
        let container = CountingContainer::default();
        let children = Rc::clone(&container.children);
        let mut provider: Provider<String> =
            Provider::new(settings(true), container, DefaultToast::default()).with_host(host);
        provider.add("a".into(), Options::new());

        let _overlay = provider.overlay();
        children.get()
    }

    #[test]
    fn headless_overlay_renders_empty_container() {
        assert_eq!(counted_children(Host::Headless), Some(0));
    }

    #[test]
    fn window_overlay_renders_each_mounted_notification() {
        assert_eq!(counted_children(Host::Window), Some(1));
    }

    #[test]
    fn settings_follow_config() {
        let settings = Settings::default();
        assert!(settings.auto_dismiss);
        assert_eq!(settings.auto_dismiss_timeout, TIMEOUT);
        assert_eq!(settings.transition_duration, TRANSITION);
    }
}
