// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Dismiss**: Auto-dismiss toggle and timeout bounds
//! - **Transition**: Enter/exit animation duration bounds
//! - **Tick**: Polling interval for timers and transitions

// ==========================================================================
// Dismiss Defaults
// ==========================================================================

/// Whether notifications dismiss themselves by default.
pub const DEFAULT_AUTO_DISMISS: bool = true;

/// Default auto-dismiss timeout (in milliseconds).
pub const DEFAULT_DISMISS_TIMEOUT_MS: u64 = 5000;

/// Minimum auto-dismiss timeout (in milliseconds).
pub const MIN_DISMISS_TIMEOUT_MS: u64 = 500;

/// Maximum auto-dismiss timeout (in milliseconds).
pub const MAX_DISMISS_TIMEOUT_MS: u64 = 60_000;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default enter/exit transition duration (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 200;

/// Minimum transition duration. Zero disables the animation.
pub const MIN_TRANSITION_MS: u64 = 0;

/// Maximum transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval between `Tick` messages while anything is mounted (in milliseconds).
///
/// Timer deadlines are checked on each tick, so this bounds how late a
/// dismissal or phase change can be observed.
pub const TICK_INTERVAL_MS: u64 = 50;
