// SPDX-License-Identifier: MPL-2.0
//! Default toast component.
//!
//! Toasts are small cards with an accent border and a dismiss button. They
//! fade and slide in while entering and fade and slide out while exiting.

use super::component::{NotificationComponent, NotificationProps};
use super::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::notifications::Message;
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};
use std::fmt::Display;

/// Card-style toast for any `Display` content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultToast {
    accent: Color,
    width: f32,
}

impl Default for DefaultToast {
    fn default() -> Self {
        Self {
            accent: palette::INFO_500,
            width: sizing::TOAST_WIDTH,
        }
    }
}

impl DefaultToast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the border accent color.
    #[must_use]
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Sets the fixed card width.
    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Renders a card around `body`, applying the transition to it.
    ///
    /// Exposed so custom components can reuse the card while supplying
    /// their own accent and body.
    pub fn card<'a>(
        body: Element<'a, Message>,
        on_dismiss: Message,
        accent: Color,
        width: f32,
        visibility: f32,
    ) -> Element<'a, Message> {
        let dismiss_button = button(Text::new("✕").size(typography::CAPTION))
            .on_press(on_dismiss)
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, visibility));

        // Layout: [body] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        let card = Container::new(content)
            .width(Length::Fixed(width))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, visibility));

        Container::new(card)
            .padding(Padding {
                left: slide_offset(visibility),
                ..Padding::ZERO
            })
            .into()
    }
}

impl<C: Display> NotificationComponent<C> for DefaultToast {
    fn view<'a>(&'a self, props: NotificationProps<'a, C>) -> Element<'a, Message> {
        let visibility = props.visibility();

        let message_widget = Text::new(props.content.to_string())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(fade(theme.palette().text, visibility)),
            });

        Self::card(
            message_widget.into(),
            props.on_dismiss,
            self.accent,
            self.width,
            visibility,
        )
    }
}

/// Multiplies a color's alpha by `visibility`.
fn fade(color: Color, visibility: f32) -> Color {
    Color {
        a: color.a * visibility.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..color
    }
}

/// Horizontal offset of a partly visible toast.
fn slide_offset(visibility: f32) -> f32 {
    sizing::TOAST_SLIDE * (1.0 - visibility.clamp(0.0, 1.0))
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color, visibility: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(fade(bg_color, visibility))),
        border: iced::Border {
            color: fade(accent_color, visibility),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: if visibility > 0.0 { shadow::MD } else { shadow::NONE },
        text_color: Some(fade(theme.palette().text, visibility)),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status, visibility: f32) -> button::Style {
    let base = theme.extended_palette().background.base;
    let text_color = fade(base.text, visibility);

    let hover_background = |alpha: f32| {
        Some(iced::Background::Color(fade(
            Color {
                a: alpha,
                ..palette::GRAY_400
            },
            visibility,
        )))
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: hover_background(opacity::OVERLAY_SUBTLE),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: hover_background(opacity::OVERLAY_MEDIUM),
            text_color,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: text_color.a * opacity::OVERLAY_MEDIUM,
                ..text_color
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
