// SPDX-License-Identifier: MPL-2.0
//! Notification identifiers.
//!
//! Callers may supply any string as an ID. When they don't, [`generate`]
//! produces a short pseudo-random one. Uniqueness is enforced by the store,
//! not by the generator.

use rand::Rng;
use std::fmt;

/// Number of distinct values in one 3-character base-36 segment (36^3).
const SEGMENT_SPACE: u32 = 46_656;

/// Width of one generated segment.
const SEGMENT_WIDTH: usize = 3;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Unique identifier for a notification within a stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(String);

impl NotificationId {
    /// Wraps a caller-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NotificationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NotificationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for NotificationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Generates a 6-character identifier from two independent base-36 segments.
#[must_use]
pub fn generate() -> NotificationId {
    let mut rng = rand::thread_rng();
    let first = segment(rng.gen_range(0..SEGMENT_SPACE));
    let second = segment(rng.gen_range(0..SEGMENT_SPACE));
    NotificationId(first + &second)
}

/// Renders `value` in lowercase base 36, left-padded with `'0'` to [`SEGMENT_WIDTH`].
fn segment(mut value: u32) -> String {
    let mut digits = [b'0'; SEGMENT_WIDTH];
    for slot in digits.iter_mut().rev() {
        *slot = BASE36_DIGITS[(value % 36) as usize];
        value /= 36;
    }
    digits.iter().map(|&b| char::from(b)).collect()
}
