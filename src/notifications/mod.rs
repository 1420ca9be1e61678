// SPDX-License-Identifier: MPL-2.0
//! Toast notification stack.
//!
//! This module keeps an ordered stack of short-lived notifications, dismisses
//! them after a timeout, and runs their enter/exit transitions. Rendering is
//! delegated to the caller-supplied components in [`crate::ui`].
//!
//! # Components
//!
//! - [`id`] - Identifier generation
//! - [`store`] - Ordered, keyed notification storage
//! - [`timer`] - Cancellable auto-dismiss countdown
//! - [`transition`] - Enter/exit phase machine
//! - [`controller`] - Timer and transition of one mounted notification
//! - [`provider`] - `Provider` composition root: stack operations, update, view
//! - [`scope`] - Scoped access to a provider's stack
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::notifications::{Options, Provider, Settings};
//!
//! let mut provider: Provider<String> = Provider::with_defaults(Settings::default());
//! let id = provider.add("Image saved".to_string(), Options::new());
//!
//! // update: provider.update(message)
//! // view: provider.view(content, Message::Notifications)
//! // subscription: provider.subscription().map(Message::Notifications)
//! ```

pub mod controller;
pub mod id;
pub mod provider;
pub mod record;
pub mod scope;
pub mod store;
pub mod timer;
pub mod transition;

pub use id::NotificationId;
pub use provider::{Event, Message, Mounted, Provider, Settings};
pub use record::{Notification, Options};
pub use scope::{use_notifications, Notifications};
pub use store::Store;
pub use timer::DismissTimer;
pub use transition::{Transition, TransitionState};
