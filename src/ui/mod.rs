// SPDX-License-Identifier: MPL-2.0
//! Presentation layer: the component contracts the provider renders through,
//! the default components, and host detection.

pub mod component;
pub mod container;
pub mod design_tokens;
pub mod host;
pub mod toast;

pub use component::{ContainerComponent, NotificationComponent, NotificationProps};
pub use container::{DefaultContainer, Placement};
pub use host::Host;
pub use toast::DefaultToast;
