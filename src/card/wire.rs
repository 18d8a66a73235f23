//! Borrowed serde views of card nodes in the webhook API's JSON layout.
//!
//! Field names, nesting and omission rules here are what the remote API
//! expects. Optional keys are omitted entirely when absent, never sent
//! as `null`.

use serde::Serialize;
use serde_json::Value;

use super::Style;

/// Wire `type` tag of a text element.
pub const TEXT_TYPE: &str = "message";
/// Wire `type` tag of an attachment element.
pub const ATTACHMENT_TYPE: &str = "attachments";
/// Wire `type` tag of a fields element.
pub const FIELDS_TYPE: &str = "fields";
/// Wire `type` tag of a section element.
pub const SECTION_TYPE: &str = "section";

/// Text with an optional style, used for titles, descriptions and sub-heads.
#[derive(Debug, Serialize)]
pub struct StyledTextWire<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<&'a Style>,
}

#[derive(Debug, Serialize)]
pub struct TextWire<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: &'a str,
    pub editable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<&'a Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct AttachmentWire<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub resource_url: &'a str,
    pub img_url: &'a str,
    pub information: InformationWire<'a>,
}

#[derive(Debug, Serialize)]
pub struct InformationWire<'a> {
    pub title: StyledTextWire<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<StyledTextWire<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct FieldWire<'a> {
    pub key: &'a str,
    pub value: &'a Value,
    pub editable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<&'a Style>,
}

#[derive(Debug, Serialize)]
pub struct FieldsWire<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub items: Vec<FieldWire<'a>>,
}

/// Footer keys, merged flat into the owning section object.
#[derive(Debug, Serialize)]
pub struct FooterWire<'a> {
    #[serde(rename = "footer", skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    #[serde(rename = "footer_icon", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<&'a str>,
    #[serde(rename = "ts", skip_serializing_if = "Option::is_none")]
    pub timestamp_millis: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct SectionWire<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub sections: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_color: Option<&'a str>,
    #[serde(flatten)]
    pub footer: Option<FooterWire<'a>>,
}

#[derive(Debug, Serialize)]
pub struct HeadWire<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<&'a Style>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_head: Option<StyledTextWire<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ContentWire<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<HeadWire<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<Value>>,
}

#[derive(Debug, Serialize)]
pub struct MessageWire<'a> {
    pub content: ContentWire<'a>,
    /// Present (and `true`) only when markdown is allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_markdown_support: Option<bool>,
}
