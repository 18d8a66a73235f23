//! Error types for webhook delivery.

use thiserror::Error;

use crate::card::CardError;

/// Error type for HTTP transport operations.
///
/// Describes what went wrong at the transport level, before any
/// response status is known.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    ///
    /// The server did not respond within the configured timeout period.
    #[error("Request timed out")]
    Timeout,

    /// The provided URL is invalid.
    ///
    /// This typically indicates a configuration error rather than
    /// a transient failure.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for building a [`WebhookClient`](super::WebhookClient) and
/// delivering messages through it.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// The endpoint did not pass URL validation.
    #[error("Endpoint is not a valid URL: '{0}'")]
    InvalidEndpoint(String),

    /// The auth token cannot be carried in an HTTP header.
    #[error("Auth token is not a valid header value: {0}")]
    InvalidAuth(#[source] http::header::InvalidHeaderValue),

    /// The message failed validation or could not be serialized.
    #[error(transparent)]
    Card(#[from] CardError),

    /// The payload could not be encoded as JSON.
    #[error("Failed to encode payload: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Server returned a non-success HTTP status.
    #[error("HTTP {status}: {}", .body.as_deref().unwrap_or("<no body>"))]
    NonSuccessStatus {
        /// The HTTP status code
        status: http::StatusCode,
        /// Response body (if available)
        body: Option<String>,
    },
}
