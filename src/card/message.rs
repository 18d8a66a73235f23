//! Message envelope: heading, body and the root message.
//!
//! The envelope types are plain containers. Validation happens in the
//! body elements they carry.

use serde_json::Value;

use super::wire::{ContentWire, HeadWire, MessageWire, StyledTextWire};
use super::{BodyElement, CardError, Style, ToWire, Validate};

/// Secondary heading shown under the [`Head`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubHead {
    /// Heading text
    pub text: String,
    /// Optional styling
    pub style: Option<Style>,
}

impl SubHead {
    /// Creates an unstyled sub-heading.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    fn wire(&self) -> StyledTextWire<'_> {
        StyledTextWire {
            text: &self.text,
            style: self.style.as_ref(),
        }
    }
}

impl ToWire for SubHead {
    fn to_wire(&self) -> Result<Value, CardError> {
        Ok(serde_json::to_value(self.wire())?)
    }
}

/// Primary heading of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Head {
    /// Heading text
    pub text: String,
    /// Optional styling
    pub style: Option<Style>,
    /// Optional secondary heading
    pub sub_head: Option<SubHead>,
}

impl Head {
    /// Creates an unstyled heading without a sub-heading.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
            sub_head: None,
        }
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the sub-heading.
    #[must_use]
    pub fn with_sub_head(mut self, sub_head: SubHead) -> Self {
        self.sub_head = Some(sub_head);
        self
    }

    fn wire(&self) -> HeadWire<'_> {
        HeadWire {
            text: &self.text,
            style: self.style.as_ref(),
            sub_head: self.sub_head.as_ref().map(SubHead::wire),
        }
    }
}

impl ToWire for Head {
    fn to_wire(&self) -> Result<Value, CardError> {
        Ok(serde_json::to_value(self.wire())?)
    }
}

/// Ordered content of a message.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Body {
    /// Elements in display order
    pub elements: Vec<BodyElement>,
}

impl Body {
    /// Creates a body from the given elements.
    #[must_use]
    pub const fn new(elements: Vec<BodyElement>) -> Self {
        Self { elements }
    }

    /// Appends an element.
    #[must_use]
    pub fn with(mut self, element: impl Into<BodyElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    fn wire(&self) -> Result<Vec<Value>, CardError> {
        self.elements.iter().map(ToWire::to_wire).collect()
    }
}

impl FromIterator<BodyElement> for Body {
    fn from_iter<I: IntoIterator<Item = BodyElement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Root card message handed to a [`WebhookClient`](crate::webhook::WebhookClient).
///
/// # Example
///
/// ```
/// use cardhook::card::{Body, Head, Message, Text, ToWire};
/// use serde_json::json;
///
/// let message = Message::new()
///     .with_head(Head::new("Title"))
///     .with_body(Body::new(vec![Text::new("Body text")?.into()]));
///
/// assert_eq!(
///     message.to_wire()?,
///     json!({
///         "content": {
///             "head": {"text": "Title"},
///             "body": [{"type": "message", "text": "Body text", "editable": false}]
///         }
///     })
/// );
/// # Ok::<(), cardhook::card::CardError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    /// Whether the API should render markdown in text elements
    pub allow_markdown: bool,
    /// Optional heading
    pub head: Option<Head>,
    /// Optional body
    pub body: Option<Body>,
}

impl Message {
    /// Creates an empty message with markdown disabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allow_markdown: false,
            head: None,
            body: None,
        }
    }

    /// Sets whether markdown is rendered.
    #[must_use]
    pub const fn with_markdown(mut self, allow_markdown: bool) -> Self {
        self.allow_markdown = allow_markdown;
        self
    }

    /// Sets the heading.
    #[must_use]
    pub fn with_head(mut self, head: Head) -> Self {
        self.head = Some(head);
        self
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Validates the message and encodes its wire form as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CardError`] if any node fails validation.
    pub fn to_json(&self) -> Result<String, CardError> {
        Ok(serde_json::to_string(&self.to_wire()?)?)
    }
}

impl Validate for Message {
    fn validate(&self) -> Result<(), CardError> {
        self.body
            .iter()
            .flat_map(|body| &body.elements)
            .try_for_each(Validate::validate)
    }
}

impl ToWire for Message {
    fn to_wire(&self) -> Result<Value, CardError> {
        let wire = MessageWire {
            content: ContentWire {
                head: self.head.as_ref().map(Head::wire),
                body: self.body.as_ref().map(Body::wire).transpose()?,
            },
            is_markdown_support: self.allow_markdown.then_some(true),
        };
        Ok(serde_json::to_value(wire)?)
    }
}
