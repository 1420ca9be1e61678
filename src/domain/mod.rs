// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by the notification stack and its configuration.
//!
//! # Modules
//!
//! - [`newtypes`]: Clamped durations ([`DismissTimeout`](newtypes::DismissTimeout),
//!   [`TransitionDuration`](newtypes::TransitionDuration))

pub mod newtypes;
