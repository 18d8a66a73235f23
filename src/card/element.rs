//! The closed set of nodes placeable in a message body.

use serde_json::Value;

use super::{Attachment, CardError, Fields, Section, Text, ToWire, Validate};

/// Any node that can appear in a [`Body`](super::Body) or inside a [`Section`].
#[derive(Debug, Clone, PartialEq)]
pub enum BodyElement {
    /// Rich text span
    Text(Text),
    /// File or media reference
    Attachment(Attachment),
    /// Key/value rows
    Fields(Fields),
    /// Section block (only valid directly in a body)
    Section(Section),
}

impl BodyElement {
    /// Returns true if this element is a section.
    #[must_use]
    pub const fn is_section(&self) -> bool {
        matches!(self, Self::Section(_))
    }
}

impl Validate for BodyElement {
    fn validate(&self) -> Result<(), CardError> {
        match self {
            Self::Text(text) => text.validate(),
            Self::Attachment(attachment) => attachment.validate(),
            Self::Fields(_) => Ok(()),
            Self::Section(section) => section.validate(),
        }
    }
}

impl ToWire for BodyElement {
    fn to_wire(&self) -> Result<Value, CardError> {
        match self {
            Self::Text(text) => text.to_wire(),
            Self::Attachment(attachment) => attachment.to_wire(),
            Self::Fields(fields) => fields.to_wire(),
            Self::Section(section) => section.to_wire(),
        }
    }
}

impl From<Text> for BodyElement {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Attachment> for BodyElement {
    fn from(attachment: Attachment) -> Self {
        Self::Attachment(attachment)
    }
}

impl From<Fields> for BodyElement {
    fn from(fields: Fields) -> Self {
        Self::Fields(fields)
    }
}

impl From<Section> for BodyElement {
    fn from(section: Section) -> Self {
        Self::Section(section)
    }
}
