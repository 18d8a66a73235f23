//! Syntactic checks shared by every card node.
//!
//! These are pure pattern checks. No DNS lookup or reachability probe
//! is ever performed.

use std::sync::LazyLock;

use regex::Regex;

use super::CardError;

/// Host and path pattern with an optional `http(s)://` (and `www.`) prefix.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(http://www\.|https://www\.|http://|https://)?[a-z0-9]+([\-.][a-z0-9]+)*\.[a-z]{2,5}(:[0-9]{1,5})?(/.*)?$",
    )
    .expect("URL pattern is a valid regex")
});

/// Absolute URL pattern requiring an explicit `http://` or `https://` scheme.
///
/// Anchored at the start only; trailing characters outside the path
/// grammar are tolerated.
static URL_WITH_SCHEME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#()?&/=]*)",
    )
    .expect("URL-with-scheme pattern is a valid regex")
});

/// How strictly [`check_url`] matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlMode {
    /// Host, optional port and optional path; the scheme may be omitted.
    #[default]
    Any,
    /// Full absolute URL with an explicit `http://` or `https://` scheme.
    WithPrefix,
}

/// Fails when `text` is empty.
///
/// # Errors
///
/// Returns [`CardError::InvalidValue`] naming `field` for a zero-length string.
pub fn check_text(field: &'static str, text: &str) -> Result<(), CardError> {
    if text.is_empty() {
        return Err(CardError::invalid_value(
            field,
            "text cannot be an empty string (use a space instead?)",
        ));
    }
    Ok(())
}

/// Returns true when `url` matches the pattern selected by `mode`.
///
/// Never fails; callers decide which error to raise.
#[must_use]
pub fn check_url(url: &str, mode: UrlMode) -> bool {
    match mode {
        UrlMode::Any => URL_PATTERN.is_match(url),
        UrlMode::WithPrefix => URL_WITH_SCHEME_PATTERN.is_match(url),
    }
}

/// Returns true when `url` already starts with `http://` or `https://`.
#[must_use]
pub fn has_http_scheme(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
