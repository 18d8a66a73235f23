//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Whether non-success responses are logged before the error is returned.
pub const VERBOSE_FAILURES: bool = true;

/// Whether markdown rendering is requested for sent cards.
pub const MARKDOWN: bool = false;

/// Default output path for `cardhook init`.
pub const CONFIG_FILE: &str = "cardhook.toml";

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
