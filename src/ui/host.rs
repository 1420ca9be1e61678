// SPDX-License-Identifier: MPL-2.0
//! Host environment detection.
//!
//! The overlay is layered above the application content, the iced
//! counterpart of mounting into a document body. When no display is
//! available (tests, CI, snapshot rendering) the provider still renders the
//! container, empty, so the widget tree keeps the same shape.

use std::ffi::OsString;

/// Environment variables that indicate a display server on Unix-like systems.
const DISPLAY_VARS: [&str; 2] = ["WAYLAND_DISPLAY", "DISPLAY"];

/// Whether the overlay can be mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Host {
    /// A window surface is available.
    #[default]
    Window,
    /// No display; the container renders empty.
    Headless,
}

impl Host {
    /// Detects the host from the process environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var_os(key))
    }

    /// Detects the host using `lookup` to read environment variables.
    pub fn detect_with(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        if !cfg!(unix) || cfg!(target_os = "macos") {
            return Host::Window;
        }

        let has_display = DISPLAY_VARS
            .iter()
            .any(|key| lookup(key).is_some_and(|value| !value.is_empty()));

        if has_display {
            Host::Window
        } else {
            Host::Headless
        }
    }

    /// Returns whether the overlay can be mounted.
    #[must_use]
    pub fn can_mount(self) -> bool {
        matches!(self, Host::Window)
    }
}
