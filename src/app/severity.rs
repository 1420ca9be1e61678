// SPDX-License-Identifier: MPL-2.0
//! Demo content type: severity-tagged messages rendered with colored accents.
//!
//! Shows how a caller plugs its own content and component into the provider.

use crate::config::MAX_DISMISS_TIMEOUT_MS;
use crate::notifications::{Message, Options};
use crate::ui::design_tokens::{palette, sizing, typography};
use crate::ui::{DefaultToast, NotificationComponent, NotificationProps};
use iced::widget::{text, Text};
use iced::{Color, Element, Theme};
use std::fmt;
use std::time::Duration;

/// Severity level determines accent color and display duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, stays up for the maximum timeout).
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss timeout for this severity.
    #[must_use]
    pub fn auto_dismiss_timeout(self) -> Duration {
        match self {
            Severity::Success | Severity::Info => Duration::from_secs(3),
            Severity::Warning => Duration::from_secs(5),
            Severity::Error => Duration::from_millis(MAX_DISMISS_TIMEOUT_MS),
        }
    }

    /// Returns the add options matching this severity.
    #[must_use]
    pub fn options(self) -> Options {
        Options::new().auto_dismiss_timeout(self.auto_dismiss_timeout())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "Success",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// Content of a demo toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastContent {
    pub severity: Severity,
    pub message: String,
}

impl ToastContent {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for ToastContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity.label(), self.message)
    }
}

/// Toast whose accent follows the content's severity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeverityToast;

impl NotificationComponent<ToastContent> for SeverityToast {
    fn view<'a>(&'a self, props: NotificationProps<'a, ToastContent>) -> Element<'a, Message> {
        let visibility = props.visibility();
        let body = Text::new(props.content.message.as_str())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(Color {
                    a: visibility,
                    ..theme.palette().text
                }),
            });

        DefaultToast::card(
            body.into(),
            props.on_dismiss,
            props.content.severity.color(),
            sizing::TOAST_WIDTH,
            visibility,
        )
    }
}
