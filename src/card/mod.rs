//! Card message model for the chat webhook API.
//!
//! This module provides:
//! - Shared primitives ([`Style`], [`check_text`], [`check_url`])
//! - Body elements ([`Text`], [`Attachment`], [`Fields`], [`Section`])
//! - The message envelope ([`Head`], [`SubHead`], [`Body`], [`Message`])
//! - The [`Validate`] and [`ToWire`] capabilities every node implements
//!
//! Nodes validate eagerly when built through their constructors and
//! `with_*` setters, and again when converted to the wire format.

mod attachment;
mod element;
mod error;
mod fields;
mod message;
mod node;
mod section;
mod style;
mod text;
mod validate;
mod wire;

#[cfg(test)]
mod attachment_tests;
#[cfg(test)]
mod section_tests;

pub use attachment::{Attachment, VALID_EXTENSIONS};
pub use element::BodyElement;
pub use error::CardError;
pub use fields::{Field, Fields};
pub use message::{Body, Head, Message, SubHead};
pub use node::{ToWire, Validate};
pub use section::{Footer, Section, Timestamp};
pub use style::Style;
pub use text::Text;
pub use validate::{UrlMode, check_text, check_url};
