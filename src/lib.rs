// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification stack for the Iced GUI framework.
//!
//! A [`Provider`](notifications::Provider) owns an ordered stack of
//! notifications, dismisses them after a timeout, and renders them as an
//! overlay above the application's content with enter and exit transitions.
//! Rendering goes through caller-replaceable components; see [`ui`].
//!
//! ```no_run
//! use iced_toasts::notifications::{Options, Provider};
//!
//! let mut provider: Provider<String> = Provider::default();
//! let id = provider.add("Saved".to_string(), Options::new());
//! assert!(id.is_some());
//! ```

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod notifications;
pub mod ui;

pub use error::{Error, Result};
