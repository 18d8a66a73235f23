//! cardhook: card messages for chat webhooks
//!
//! A library for building structured card messages (heading, text,
//! attachments, key/value fields and sections), validating them, and
//! delivering them to a chat service's incoming-webhook endpoint.

pub mod card;
pub mod config;
pub mod webhook;
