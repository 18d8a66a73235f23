//! Webhook sender trait and the bearer-token HTTP client.

use http::header::HeaderValue;
use serde_json::Value;

use crate::card::{Message, ToWire, UrlMode, check_url};

use super::{HttpClient, HttpError, JsonPost, ReqwestClient, WebhookError};

/// Query pair appended to every delivery URL.
pub const FORMAT_QUERY: (&str, &str) = ("format", "full");

/// Trait for delivering card messages to a chat service.
///
/// This abstraction allows alternative delivery mechanisms (for example
/// a dry-run printer) and enables testing with mocks.
pub trait WebhookSender: Send + Sync {
    /// Validates and serializes `message`, then delivers it.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Card`] if the message fails validation; in
    /// that case nothing is sent. Transport and status failures are
    /// returned as the other [`WebhookError`] variants.
    fn send(
        &self,
        message: &Message,
    ) -> impl std::future::Future<Output = Result<(), WebhookError>> + Send;

    /// Delivers a caller-built payload as-is, bypassing the card model.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError`] if the payload cannot be encoded or delivered.
    fn send_raw(
        &self,
        payload: &Value,
    ) -> impl std::future::Future<Output = Result<(), WebhookError>> + Send;
}

/// How a non-success response is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureReporting {
    /// Log the status and response body, then return the error.
    #[default]
    Verbose,
    /// Return the error without logging.
    Silent,
}

/// Delivery endpoint for card messages.
///
/// Each payload is POSTed as JSON to the endpoint with `format=full`
/// added to the query, and the auth token is sent verbatim in the
/// `Authorization` header.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation (defaults to [`ReqwestClient`])
///
/// # Example
///
/// ```no_run
/// use cardhook::card::{Body, Head, Message, Text};
/// use cardhook::webhook::{WebhookClient, WebhookSender};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = WebhookClient::new("https://chat.example.com/v1/im/webhook", "token")?;
/// let message = Message::new()
///     .with_head(Head::new("Deploy finished"))
///     .with_body(Body::default().with(Text::new("All green")?));
/// client.send(&message).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct WebhookClient<H = ReqwestClient> {
    client: H,
    endpoint: String,
    auth: HeaderValue,
    reporting: FailureReporting,
}

impl WebhookClient<ReqwestClient> {
    /// Creates a client using the default reqwest transport.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::InvalidEndpoint`] if `endpoint` is not a
    /// valid URL, or [`WebhookError::InvalidAuth`] if `auth` cannot be
    /// sent as a header value. No network call is made.
    pub fn new(endpoint: impl Into<String>, auth: impl AsRef<str>) -> Result<Self, WebhookError> {
        Self::with_client(ReqwestClient::new(), endpoint, auth)
    }
}

impl<H> WebhookClient<H> {
    /// Creates a client driven by the given HTTP client.
    ///
    /// # Errors
    ///
    /// Same as [`WebhookClient::new`].
    pub fn with_client(
        client: H,
        endpoint: impl Into<String>,
        auth: impl AsRef<str>,
    ) -> Result<Self, WebhookError> {
        let endpoint = endpoint.into();
        if !check_url(&endpoint, UrlMode::Any) {
            return Err(WebhookError::InvalidEndpoint(endpoint));
        }

        let mut auth = HeaderValue::from_str(auth.as_ref()).map_err(WebhookError::InvalidAuth)?;
        auth.set_sensitive(true);

        Ok(Self {
            client,
            endpoint,
            auth,
            reporting: FailureReporting::default(),
        })
    }

    /// Replaces the HTTP client, keeping endpoint, auth and reporting mode.
    #[must_use]
    pub fn with_http_client<H2>(self, client: H2) -> WebhookClient<H2> {
        WebhookClient {
            client,
            endpoint: self.endpoint,
            auth: self.auth,
            reporting: self.reporting,
        }
    }

    /// Sets how non-success responses are reported.
    #[must_use]
    pub const fn with_failure_reporting(mut self, reporting: FailureReporting) -> Self {
        self.reporting = reporting;
        self
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the configured failure reporting mode.
    #[must_use]
    pub const fn failure_reporting(&self) -> FailureReporting {
        self.reporting
    }

    /// Returns the transport payloads are posted through.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.client
    }

    /// Builds the URL payloads are POSTed to.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidUrl`] if the endpoint is not an absolute
    /// URL (an endpoint without a scheme passes validation but cannot be
    /// dialed).
    pub fn delivery_url(&self) -> Result<url::Url, HttpError> {
        let mut url =
            url::Url::parse(&self.endpoint).map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair(FORMAT_QUERY.0, FORMAT_QUERY.1);
        Ok(url)
    }
}

impl<H: HttpClient> WebhookClient<H> {
    /// Builds the POST carrying `payload`.
    fn build_post(&self, payload: &Value) -> Result<JsonPost, WebhookError> {
        let body = serde_json::to_vec(payload).map_err(WebhookError::Encode)?;
        Ok(JsonPost::new(self.delivery_url()?, self.auth.clone(), body))
    }

    /// POSTs `payload` and maps the response status.
    async fn deliver(&self, payload: &Value) -> Result<(), WebhookError> {
        let post = self.build_post(payload)?;
        tracing::debug!(
            url = %post.url,
            bytes = post.body.len(),
            "Delivering webhook payload"
        );

        let response = self.client.post(post).await?;

        if response.is_success() {
            tracing::debug!(status = %response.status, "Webhook payload delivered");
            return Ok(());
        }

        let body = response.body_text().map(ToString::to_string);
        if self.reporting == FailureReporting::Verbose {
            tracing::warn!(
                status = %response.status,
                body = body.as_deref().unwrap_or("<non-UTF-8 body>"),
                "Webhook delivery failed"
            );
        }

        Err(WebhookError::NonSuccessStatus {
            status: response.status,
            body,
        })
    }
}

impl<H: HttpClient> WebhookSender for WebhookClient<H> {
    async fn send(&self, message: &Message) -> Result<(), WebhookError> {
        let payload = message.to_wire()?;
        self.deliver(&payload).await
    }

    async fn send_raw(&self, payload: &Value) -> Result<(), WebhookError> {
        self.deliver(payload).await
    }
}
