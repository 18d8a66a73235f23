//! Key/value rows body element.
//!
//! Unlike the other body elements, fields carry no validation rules:
//! keys, values and styles are sent exactly as given.

use serde_json::Value;

use super::wire::{FIELDS_TYPE, FieldWire, FieldsWire};
use super::{CardError, Style, ToWire};

/// A single key/value row.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Row label
    pub key: String,
    /// Row value; any JSON value is passed through unchanged
    pub value: Value,
    /// Whether the row may share a line with its neighbour
    pub short: Option<bool>,
    /// Whether recipients may edit the value
    pub editable: bool,
    /// Optional styling
    pub style: Option<Style>,
}

impl Field {
    /// Creates a non-editable, unstyled row.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            short: None,
            editable: false,
            style: None,
        }
    }

    /// Sets the `short` layout hint.
    #[must_use]
    pub const fn with_short(mut self, short: bool) -> Self {
        self.short = Some(short);
        self
    }

    /// Sets whether recipients may edit the value.
    #[must_use]
    pub const fn with_editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    fn wire(&self) -> FieldWire<'_> {
        FieldWire {
            key: &self.key,
            value: &self.value,
            editable: self.editable,
            short: self.short,
            style: self.style.as_ref(),
        }
    }
}

impl ToWire for Field {
    fn to_wire(&self) -> Result<Value, CardError> {
        Ok(serde_json::to_value(self.wire())?)
    }
}

/// An ordered collection of [`Field`] rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    /// Rows in display order
    pub items: Vec<Field>,
}

impl Fields {
    /// Creates a collection from the given rows.
    #[must_use]
    pub const fn new(items: Vec<Field>) -> Self {
        Self { items }
    }

    /// Appends a row.
    #[must_use]
    pub fn with(mut self, field: Field) -> Self {
        self.items.push(field);
        self
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ToWire for Fields {
    fn to_wire(&self) -> Result<Value, CardError> {
        let wire = FieldsWire {
            kind: FIELDS_TYPE,
            items: self.items.iter().map(Field::wire).collect(),
        };
        Ok(serde_json::to_value(wire)?)
    }
}
