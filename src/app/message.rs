// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use super::severity::Severity;
use crate::notifications;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Push a new toast of the given severity.
    Push(Severity),
    /// Remove every toast.
    DismissAll,
    /// Flip provider-wide auto-dismiss.
    ToggleAutoDismiss,
    Notifications(notifications::Message),
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Overrides `[dismiss] timeout_ms`.
    pub timeout_ms: Option<u64>,
    /// Overrides `[transition] duration_ms`.
    pub transition_ms: Option<u64>,
    /// Disables auto-dismiss regardless of config.
    pub no_auto_dismiss: bool,
    /// Directory holding `settings.toml`.
    pub config_dir: Option<String>,
}
