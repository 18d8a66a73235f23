//! Rich text span body element.

use std::borrow::Cow;

use super::validate::{UrlMode, check_text, check_url, has_http_scheme};
use super::wire::{TEXT_TYPE, TextWire};
use super::{CardError, Style, ToWire, Validate};

/// A span of rich text, optionally linked and styled.
///
/// The webhook API calls this element type `message`.
///
/// # Example
///
/// ```
/// use cardhook::card::{Text, ToWire};
///
/// let text = Text::new("hello")?.with_link("example.com")?;
/// let wire = text.to_wire()?;
/// assert_eq!(wire["link"], "http://example.com");
/// assert_eq!(wire["type"], "message");
/// # Ok::<(), cardhook::card::CardError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The text itself (non-empty)
    pub text: String,
    /// Link target; a missing scheme is filled in with `http://`
    pub link: Option<String>,
    /// Optional styling
    pub style: Option<Style>,
    /// Whether recipients may edit the text
    pub editable: bool,
}

impl Text {
    /// Creates an unlinked, unstyled, non-editable text span.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if `text` is empty.
    pub fn new(text: impl Into<String>) -> Result<Self, CardError> {
        let text = text.into();
        check_text("text", &text)?;
        Ok(Self {
            text,
            link: None,
            style: None,
            editable: false,
        })
    }

    /// Sets the link target.
    ///
    /// A link without an `http://` or `https://` prefix gets `http://`
    /// prepended before it is checked.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if the prefixed link is not a
    /// valid absolute URL.
    pub fn with_link(mut self, link: impl Into<String>) -> Result<Self, CardError> {
        let link = normalize_link(&link.into()).into_owned();
        check_link(&link)?;
        self.link = Some(link);
        Ok(self)
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets whether recipients may edit the text.
    #[must_use]
    pub const fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }
}

impl Validate for Text {
    fn validate(&self) -> Result<(), CardError> {
        check_text("text", &self.text)?;
        if let Some(link) = &self.link {
            check_link(&normalize_link(link))?;
        }
        Ok(())
    }
}

impl ToWire for Text {
    fn to_wire(&self) -> Result<serde_json::Value, CardError> {
        self.validate()?;

        let link = self.link.as_deref().map(normalize_link);
        let wire = TextWire {
            kind: TEXT_TYPE,
            text: &self.text,
            editable: self.editable,
            style: self.style.as_ref(),
            link: link.as_deref(),
        };
        Ok(serde_json::to_value(wire)?)
    }
}

fn normalize_link(link: &str) -> Cow<'_, str> {
    if has_http_scheme(link) {
        Cow::Borrowed(link)
    } else {
        Cow::Owned(format!("http://{link}"))
    }
}

fn check_link(link: &str) -> Result<(), CardError> {
    if check_url(link, UrlMode::WithPrefix) {
        Ok(())
    } else {
        Err(CardError::invalid_value(
            "link",
            format!("must be a valid URL with protocol; was given \"{link}\""),
        ))
    }
}
