//! Visual styling shared by styleable nodes.

use serde::Serialize;

/// Color and emphasis applied to a piece of text.
///
/// Plain value holder; it carries no validation of its own.
///
/// # Example
///
/// ```
/// use cardhook::card::Style;
///
/// let style = Style::new().with_color("#FF0000").with_bold(true);
/// assert_eq!(style.color.as_deref(), Some("#FF0000"));
/// assert!(!style.italic);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    /// Hex color including the leading `#`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Creates an unstyled (no color, regular weight) style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: None,
            bold: false,
            italic: false,
        }
    }

    /// Sets the text color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets bold emphasis.
    #[must_use]
    pub const fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets italic emphasis.
    #[must_use]
    pub const fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}
