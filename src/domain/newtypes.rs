// SPDX-License-Identifier: MPL-2.0
//! Notification newtypes.
//!
//! This module provides type-safe wrappers for timing values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_DISMISS_TIMEOUT_MS, DEFAULT_TRANSITION_MS, MAX_DISMISS_TIMEOUT_MS, MAX_TRANSITION_MS,
    MIN_DISMISS_TIMEOUT_MS, MIN_TRANSITION_MS,
};
use std::time::Duration;

// =============================================================================
// DismissTimeout
// =============================================================================

/// Auto-dismiss timeout in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (500 ms – 60 s).
///
/// # Example
///
/// ```
/// use iced_toasts::domain::newtypes::DismissTimeout;
///
/// let timeout = DismissTimeout::new(3000);
/// assert_eq!(timeout.value(), 3000);
///
/// // Values outside range are clamped
/// let too_high = DismissTimeout::new(600_000);
/// assert_eq!(too_high.value(), 60_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DismissTimeout(u64);

impl DismissTimeout {
    /// Creates a new timeout, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_DISMISS_TIMEOUT_MS, MAX_DISMISS_TIMEOUT_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DismissTimeout {
    fn default() -> Self {
        Self(DEFAULT_DISMISS_TIMEOUT_MS)
    }
}

impl From<DismissTimeout> for Duration {
    fn from(timeout: DismissTimeout) -> Self {
        timeout.as_duration()
    }
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Duration of a single enter or exit phase, in milliseconds (0 – 2000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a new transition duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the duration as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_MS)
    }
}

impl From<TransitionDuration> for Duration {
    fn from(duration: TransitionDuration) -> Self {
        duration.as_duration()
    }
}
