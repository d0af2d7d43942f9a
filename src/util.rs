//! Utility functions shared across modules.

use std::time::Duration;

/// Formats a `std::time::Duration` into a human-readable string using `humantime`.
/// Sub-millisecond precision is dropped; it is noise in an exit summary.
#[inline]
pub fn format_duration(duration: Duration) -> String {
    let ms = Duration::from_millis(duration.as_millis().min(u64::MAX as u128) as u64);
    humantime::format_duration(ms).to_string()
}
