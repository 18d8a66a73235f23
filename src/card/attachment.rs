//! File and media reference body element.

use super::validate::{UrlMode, check_text, check_url};
use super::wire::{ATTACHMENT_TYPE, AttachmentWire, InformationWire, StyledTextWire};
use super::{CardError, Style, ToWire, Validate};

/// File extensions the webhook API accepts for attachments (lower-case).
pub const VALID_EXTENSIONS: &[&str] = &["pdf", "txt", "doc", "xlsx", "zip", "jpeg", "png"];

/// A reference to a downloadable resource with a preview image.
///
/// # Example
///
/// ```
/// use cardhook::card::{Attachment, Style};
///
/// let attachment = Attachment::new(
///     "https://example.com/report.pdf",
///     "https://example.com/report.png",
///     "Quarterly report",
/// )?
/// .with_description("Numbers for Q3")?
/// .with_description_style(Style::new().with_italic(true))?
/// .with_ext("PDF")?
/// .with_size(1024);
///
/// assert_eq!(attachment.ext.as_deref(), Some("pdf"));
/// # Ok::<(), cardhook::card::CardError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// URL of the resource itself
    pub resource_url: String,
    /// URL of the preview image
    pub img_url: String,
    /// Title shown for the attachment (non-empty)
    pub title: String,
    /// Style of the title
    pub title_style: Option<Style>,
    /// Optional description (non-empty when present)
    pub description: Option<String>,
    /// Style of the description; requires `description`
    pub description_style: Option<Style>,
    /// File extension, one of [`VALID_EXTENSIONS`]
    pub ext: Option<String>,
    /// Resource size in bytes
    pub size: Option<u64>,
}

impl Attachment {
    /// Creates an attachment with the required URLs and title.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if either URL is invalid or the
    /// title is empty.
    pub fn new(
        resource_url: impl Into<String>,
        img_url: impl Into<String>,
        title: impl Into<String>,
    ) -> Result<Self, CardError> {
        let attachment = Self {
            resource_url: resource_url.into(),
            img_url: img_url.into(),
            title: title.into(),
            title_style: None,
            description: None,
            description_style: None,
            ext: None,
            size: None,
        };
        attachment.validate()?;
        Ok(attachment)
    }

    /// Sets the title style.
    #[must_use]
    pub fn with_title_style(mut self, style: Style) -> Self {
        self.title_style = Some(style);
        self
    }

    /// Sets the description.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if `description` is empty.
    pub fn with_description(mut self, description: impl Into<String>) -> Result<Self, CardError> {
        let description = description.into();
        check_text("description", &description)?;
        self.description = Some(description);
        Ok(self)
    }

    /// Sets the description style.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::MissingComponent`] if no description was set.
    pub fn with_description_style(mut self, style: Style) -> Result<Self, CardError> {
        if self.description.is_none() {
            return Err(missing_description());
        }
        self.description_style = Some(style);
        Ok(self)
    }

    /// Sets the file extension, lower-casing it first.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidValue`] if the extension is not one of
    /// [`VALID_EXTENSIONS`].
    pub fn with_ext(mut self, ext: impl AsRef<str>) -> Result<Self, CardError> {
        let ext = ext.as_ref().to_lowercase();
        check_ext(&ext)?;
        self.ext = Some(ext);
        Ok(self)
    }

    /// Sets the resource size in bytes.
    #[must_use]
    pub const fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }
}

impl Validate for Attachment {
    fn validate(&self) -> Result<(), CardError> {
        if !check_url(&self.resource_url, UrlMode::Any) || !check_url(&self.img_url, UrlMode::Any)
        {
            return Err(CardError::invalid_value(
                "resource_url/img_url",
                "resource_url and img_url must be valid URLs",
            ));
        }

        if let Some(ext) = &self.ext {
            check_ext(ext)?;
        }

        if self.description_style.is_some() && self.description.is_none() {
            return Err(missing_description());
        }

        check_text("title", &self.title)?;
        if let Some(description) = &self.description {
            check_text("description", description)?;
        }

        Ok(())
    }
}

impl ToWire for Attachment {
    fn to_wire(&self) -> Result<serde_json::Value, CardError> {
        self.validate()?;

        let description = self.description.as_deref().map(|text| StyledTextWire {
            text,
            style: self.description_style.as_ref(),
        });
        let wire = AttachmentWire {
            kind: ATTACHMENT_TYPE,
            resource_url: &self.resource_url,
            img_url: &self.img_url,
            information: InformationWire {
                title: StyledTextWire {
                    text: &self.title,
                    style: self.title_style.as_ref(),
                },
                description,
                ext: self.ext.as_deref(),
                size: self.size,
            },
        };
        Ok(serde_json::to_value(wire)?)
    }
}

fn check_ext(ext: &str) -> Result<(), CardError> {
    if VALID_EXTENSIONS.contains(&ext) {
        Ok(())
    } else {
        Err(CardError::invalid_value(
            "ext",
            format!(
                "\"{ext}\" is not one of: {}",
                VALID_EXTENSIONS.join(", ")
            ),
        ))
    }
}

const fn missing_description() -> CardError {
    CardError::missing("description style", "description")
}
