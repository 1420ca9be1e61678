// SPDX-License-Identifier: MPL-2.0
//! Demo application: a window with buttons that push toasts of each severity.
//!
//! The `App` owns a [`Provider`] and forwards its messages, the same way any
//! iced application would embed the notification stack.

mod message;
mod severity;

pub use message::{Flags, Message};
pub use severity::{Severity, SeverityToast, ToastContent};

use crate::config::{self, Config};
use crate::notifications::{Event, Provider, Settings};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::DefaultContainer;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 320;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root application state.
#[derive(Debug)]
pub struct App {
    notifications: Provider<ToastContent>,
    pushed: usize,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 wants an `Fn` boot; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies command-line overrides on top of the loaded config.
fn apply_flags(mut config: Config, flags: &Flags) -> Config {
    if let Some(timeout_ms) = flags.timeout_ms {
        config.dismiss.timeout_ms = Some(timeout_ms);
    }
    if let Some(transition_ms) = flags.transition_ms {
        config.transition.duration_ms = Some(transition_ms);
    }
    if flags.no_auto_dismiss {
        config.dismiss.auto_dismiss = Some(false);
    }
    config
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        let config = apply_flags(config, &flags);

        let settings = Settings::from(&config);
        tracing::info!(
            auto_dismiss = settings.auto_dismiss,
            timeout_ms = settings.auto_dismiss_timeout.as_millis() as u64,
            transition_ms = settings.transition_duration.as_millis() as u64,
            "starting notification demo"
        );

        let mut app = Self::with_settings(settings);
        if let Some(warning) = config_warning {
            app.notifications.add(
                ToastContent::new(Severity::Warning, warning),
                Severity::Warning.options(),
            );
        }

        (app, Task::none())
    }

    /// Creates the app around a provider built from `settings`.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            notifications: Provider::new(settings, DefaultContainer::default(), SeverityToast),
            pushed: 0,
        }
    }

    /// Read access to the embedded provider.
    pub fn notifications(&self) -> &Provider<ToastContent> {
        &self.notifications
    }

    fn title(&self) -> String {
        let count = self.notifications.notifications().len();
        if count == 0 {
            "Iced Toasts".to_string()
        } else {
            format!("Iced Toasts ({count})")
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Push(severity) => {
                self.pushed += 1;
                let content = ToastContent::new(
                    severity,
                    format!("{} notification #{}", severity.label(), self.pushed),
                );
                if let Some(id) = self.notifications.add(content, severity.options()) {
                    tracing::debug!(%id, ?severity, "pushed notification");
                }
            }
            Message::DismissAll => {
                self.notifications.remove_all();
            }
            Message::ToggleAutoDismiss => {
                let enabled = !self.notifications.settings().auto_dismiss;
                self.notifications.set_auto_dismiss(enabled);
                tracing::info!(enabled, "auto-dismiss toggled");
            }
            Message::Notifications(message) => {
                for event in self.notifications.update(message) {
                    log_event(&event);
                }
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let pushers = Severity::ALL.iter().fold(
            Row::new().spacing(spacing::SM),
            |row, severity| {
                row.push(button(Text::new(severity.label())).on_press(Message::Push(*severity)))
            },
        );

        let auto_dismiss_label = if self.notifications.settings().auto_dismiss {
            "Auto-dismiss: on"
        } else {
            "Auto-dismiss: off"
        };

        let controls = Row::new()
            .spacing(spacing::SM)
            .push(button(Text::new("Dismiss all")).on_press(Message::DismissAll))
            .push(button(Text::new(auto_dismiss_label)).on_press(Message::ToggleAutoDismiss));

        let status = Text::new(format!(
            "{} in stack",
            self.notifications.notifications().len()
        ))
        .size(typography::CAPTION);

        let content = Container::new(
            Column::new()
                .spacing(spacing::MD)
                .align_x(alignment::Horizontal::Center)
                .push(pushers)
                .push(controls)
                .push(status),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

        self.notifications.view(content, Message::Notifications)
    }

    fn subscription(&self) -> Subscription<Message> {
        self.notifications.subscription().map(Message::Notifications)
    }
}

fn log_event(event: &Event) {
    match event {
        Event::Entered(id) => tracing::trace!(%id, "notification entered"),
        Event::Dismissed(id) => tracing::debug!(%id, "notification dismissed"),
        Event::AutoDismissed(id) => tracing::debug!(%id, "notification auto-dismissed"),
        Event::Unmounted(id) => tracing::trace!(%id, "notification unmounted"),
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}
