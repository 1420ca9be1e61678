// SPDX-License-Identifier: MPL-2.0
//! Default overlay container.
//!
//! Stacks rendered toasts vertically in one corner of the window.

use super::component::ContainerComponent;
use super::design_tokens::spacing;
use crate::notifications::Message;
use iced::widget::{Column, Container};
use iced::{alignment, Element, Length};

/// Corner of the window the toasts are anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Placement {
    fn horizontal(self) -> alignment::Horizontal {
        match self {
            Placement::TopLeft | Placement::BottomLeft => alignment::Horizontal::Left,
            Placement::TopRight | Placement::BottomRight => alignment::Horizontal::Right,
        }
    }

    fn vertical(self) -> alignment::Vertical {
        match self {
            Placement::TopLeft | Placement::TopRight => alignment::Vertical::Top,
            Placement::BottomLeft | Placement::BottomRight => alignment::Vertical::Bottom,
        }
    }
}

/// Column of toasts anchored to a corner, bottom-right by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultContainer {
    placement: Placement,
    spacing: f32,
    padding: f32,
}

impl Default for DefaultContainer {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            spacing: spacing::XS,
            padding: spacing::MD,
        }
    }
}

impl DefaultContainer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchors the toasts to another corner.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Sets the gap between toasts.
    #[must_use]
    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets the distance from the window edges.
    #[must_use]
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Returns the anchoring corner.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }
}

impl ContainerComponent for DefaultContainer {
    fn view<'a>(&'a self, children: Vec<Element<'a, Message>>) -> Element<'a, Message> {
        let column = Column::with_children(children)
            .spacing(self.spacing)
            .align_x(self.placement.horizontal());

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(self.placement.horizontal())
            .align_y(self.placement.vertical())
            .padding(self.padding)
            .into()
    }
}
