//! Section composite body element and its footer.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

use super::validate::{UrlMode, check_text, check_url};
use super::wire::{FooterWire, SECTION_TYPE, SectionWire};
use super::{BodyElement, CardError, ToWire, Validate};

/// Footer timestamp, converted to integer epoch milliseconds on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    /// Epoch milliseconds
    Millis(i64),
    /// Epoch milliseconds from an unsigned source, checked against the `i64` range
    UnsignedMillis(u64),
    /// Epoch milliseconds with a fractional part, truncated on the wire
    FloatMillis(f64),
    /// A point in time
    DateTime(SystemTime),
    /// Numeric text such as `"1700000000000"` or `"1.7e12"`
    Text(String),
}

impl Timestamp {
    /// Converts the timestamp to integer epoch milliseconds.
    ///
    /// Fractional values are truncated toward zero. Points in time before
    /// the Unix epoch produce negative values.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidType`] for text that is not a finite
    /// number, and [`CardError::InvalidValue`] for a non-finite float or a
    /// value outside the `i64` millisecond range.
    pub fn to_millis(&self) -> Result<i64, CardError> {
        match self {
            Self::Millis(millis) => Ok(*millis),
            Self::UnsignedMillis(millis) => {
                i64::try_from(*millis).map_err(|_| out_of_range(millis))
            }
            Self::FloatMillis(millis) => float_millis(*millis),
            Self::DateTime(time) => system_time_millis(*time),
            Self::Text(text) => {
                let value = text
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| {
                        CardError::invalid_type(
                            "unix_timestamp",
                            format!(
                                "must be a date-time or an integer (date in milliseconds); was given \"{text}\""
                            ),
                        )
                    })?;
                float_millis(value)
            }
        }
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self::Millis(millis)
    }
}

impl From<i32> for Timestamp {
    fn from(millis: i32) -> Self {
        Self::Millis(i64::from(millis))
    }
}

impl From<u32> for Timestamp {
    fn from(millis: u32) -> Self {
        Self::Millis(i64::from(millis))
    }
}

impl From<u64> for Timestamp {
    fn from(millis: u64) -> Self {
        Self::UnsignedMillis(millis)
    }
}

impl From<f64> for Timestamp {
    fn from(millis: f64) -> Self {
        Self::FloatMillis(millis)
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        Self::DateTime(time)
    }
}

impl From<&str> for Timestamp {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

fn out_of_range(millis: impl std::fmt::Display) -> CardError {
    CardError::invalid_value(
        "unix_timestamp",
        format!("{millis} is outside the representable millisecond range"),
    )
}

// -2^63 and 2^63 are exact in f64
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn float_millis(value: f64) -> Result<i64, CardError> {
    if !value.is_finite() {
        return Err(CardError::invalid_value(
            "unix_timestamp",
            format!("{value} is not finite"),
        ));
    }

    let truncated = value.trunc();
    if (I64_LOWER..I64_UPPER).contains(&truncated) {
        Ok(truncated as i64)
    } else {
        Err(out_of_range(value))
    }
}

fn system_time_millis(time: SystemTime) -> Result<i64, CardError> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_millis()).map_err(|_| out_of_range(since.as_millis())),
        Err(before) => {
            let before = before.duration().as_millis();
            i64::try_from(before)
                .map(|millis| -millis)
                .map_err(|_| out_of_range(format!("-{before}")))
        }
    }
}

/// Metadata shown at the bottom of a [`Section`].
///
/// Every part is optional; its keys are merged flat into the section
/// object on the wire (`footer`, `footer_icon`, `ts`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Footer {
    /// Footer text (non-empty when present)
    pub text: Option<String>,
    /// Icon shown next to the footer text
    pub icon_url: Option<String>,
    /// Timestamp shown in the footer
    pub unix_timestamp: Option<Timestamp>,
}

impl Footer {
    /// Creates an empty footer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: None,
            icon_url: None,
            unix_timestamp: None,
        }
    }

    /// Sets the footer text.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if `text` is empty.
    pub fn with_text(mut self, text: impl Into<String>) -> Result<Self, CardError> {
        let text = text.into();
        check_text("footer text", &text)?;
        self.text = Some(text);
        Ok(self)
    }

    /// Sets the icon URL.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if `icon_url` is not a valid URL.
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Result<Self, CardError> {
        let icon_url = icon_url.into();
        check_icon_url(&icon_url)?;
        self.icon_url = Some(icon_url);
        Ok(self)
    }

    /// Sets the timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`CardError`] if the timestamp cannot be converted to
    /// epoch milliseconds.
    pub fn with_timestamp(mut self, timestamp: impl Into<Timestamp>) -> Result<Self, CardError> {
        let timestamp = timestamp.into();
        timestamp.to_millis()?;
        self.unix_timestamp = Some(timestamp);
        Ok(self)
    }

    fn wire(&self) -> Result<FooterWire<'_>, CardError> {
        Ok(FooterWire {
            text: self.text.as_deref(),
            icon_url: self.icon_url.as_deref(),
            timestamp_millis: self
                .unix_timestamp
                .as_ref()
                .map(Timestamp::to_millis)
                .transpose()?,
        })
    }
}

impl Validate for Footer {
    fn validate(&self) -> Result<(), CardError> {
        if let Some(text) = &self.text {
            check_text("footer text", text)?;
        }
        if let Some(icon_url) = &self.icon_url {
            check_icon_url(icon_url)?;
        }
        if let Some(timestamp) = &self.unix_timestamp {
            timestamp.to_millis()?;
        }
        Ok(())
    }
}

impl ToWire for Footer {
    fn to_wire(&self) -> Result<Value, CardError> {
        self.validate()?;
        Ok(serde_json::to_value(self.wire()?)?)
    }
}

fn check_icon_url(icon_url: &str) -> Result<(), CardError> {
    if check_url(icon_url, UrlMode::Any) {
        Ok(())
    } else {
        Err(CardError::invalid_value(
            "icon_url",
            format!("section footer icon url must be a valid URL; was given \"{icon_url}\""),
        ))
    }
}

/// A block grouping text, attachments and fields under an optional
/// sidebar color and footer.
///
/// Sections cannot contain other sections.
///
/// # Example
///
/// ```
/// use cardhook::card::{Footer, Section, Text};
///
/// let section = Section::new(vec![Text::new("inside")?.into()])?
///     .with_sidebar_color("#00FF00")
///     .with_footer(Footer::new().with_text("sent by bot")?.with_timestamp(1_700_000_000_000_i64)?);
///
/// assert_eq!(section.elements.len(), 1);
/// # Ok::<(), cardhook::card::CardError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Child elements in display order (at least one, no sections)
    pub elements: Vec<BodyElement>,
    /// Color of the bar along the section's side
    pub sidebar_color: Option<String>,
    /// Optional footer
    pub footer: Option<Footer>,
}

impl Section {
    /// Creates a section holding `elements`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if `elements` is empty or contains
    /// a section.
    pub fn new(elements: Vec<BodyElement>) -> Result<Self, CardError> {
        let section = Self {
            elements,
            sidebar_color: None,
            footer: None,
        };
        section.validate()?;
        Ok(section)
    }

    /// Sets the sidebar color.
    #[must_use]
    pub fn with_sidebar_color(mut self, color: impl Into<String>) -> Self {
        self.sidebar_color = Some(color.into());
        self
    }

    /// Sets the footer.
    #[must_use]
    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }
}

impl Validate for Section {
    fn validate(&self) -> Result<(), CardError> {
        if self.elements.is_empty() {
            return Err(CardError::invalid_value(
                "elements",
                "Sections require at least one element",
            ));
        }

        if self.elements.iter().any(BodyElement::is_section) {
            return Err(CardError::invalid_value(
                "elements",
                "Section elements cannot be sections",
            ));
        }

        self.elements.iter().try_for_each(Validate::validate)?;

        if let Some(footer) = &self.footer {
            footer.validate()?;
        }

        Ok(())
    }
}

impl ToWire for Section {
    fn to_wire(&self) -> Result<Value, CardError> {
        self.validate()?;

        let sections = self
            .elements
            .iter()
            .map(ToWire::to_wire)
            .collect::<Result<Vec<_>, _>>()?;
        let wire = SectionWire {
            kind: SECTION_TYPE,
            sections,
            sidebar_color: self.sidebar_color.as_deref(),
            footer: self.footer.as_ref().map(Footer::wire).transpose()?,
        };
        Ok(serde_json::to_value(wire)?)
    }
}
