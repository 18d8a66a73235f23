//! Webhook layer for delivering card messages over HTTP.
//!
//! This module provides types and traits for:
//! - The JSON POST sent to the service ([`JsonPost`]) and its answer ([`PostResponse`])
//! - Abstracting the transport ([`HttpClient`])
//! - Production HTTP client implementation ([`ReqwestClient`])
//! - Message delivery with bearer-token auth ([`WebhookSender`], [`WebhookClient`])

mod client;
mod error;
mod http;
mod sender;

#[cfg(test)]
mod client_tests;

pub use client::ReqwestClient;
pub use error::{HttpError, WebhookError};
pub use http::{HttpClient, JsonPost, PostResponse};
pub use sender::{FORMAT_QUERY, FailureReporting, WebhookClient, WebhookSender};
