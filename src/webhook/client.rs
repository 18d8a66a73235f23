//! reqwest-backed [`HttpClient`].

use std::time::Duration;

use super::{HttpClient, HttpError, JsonPost, PostResponse};

/// Default transport for [`WebhookClient`](super::WebhookClient).
///
/// # Example
///
/// ```no_run
/// use cardhook::webhook::{HttpClient, JsonPost, ReqwestClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReqwestClient::with_timeout(std::time::Duration::from_secs(10))?;
/// let url = url::Url::parse("https://chat.example.com/webhook?format=full")?;
/// let auth = http::HeaderValue::from_static("token");
/// let response = client.post(JsonPost::new(url, auth, br#"{"content":{}}"#.to_vec())).await?;
/// println!("Status: {}", response.status);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    timeout: Option<Duration>,
}

impl ReqwestClient {
    /// Creates a client with reqwest's defaults (no request timeout).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Connection`] if the TLS backend or resolver
    /// cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map(|inner| Self {
                inner,
                timeout: Some(timeout),
            })
            .map_err(|e| HttpError::Connection(Box::new(e)))
    }

    /// Wraps an already configured reqwest client.
    ///
    /// [`timeout`](Self::timeout) reports `None`, since reqwest does not
    /// expose the timeout it was built with.
    #[must_use]
    pub const fn from_client(inner: reqwest::Client) -> Self {
        Self {
            inner,
            timeout: None,
        }
    }

    /// Request timeout set through [`with_timeout`](Self::with_timeout).
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

fn classify(error: reqwest::Error) -> HttpError {
    if error.is_timeout() {
        HttpError::Timeout
    } else if error.is_builder() {
        HttpError::InvalidUrl(error.to_string())
    } else {
        HttpError::Connection(Box::new(error))
    }
}

impl HttpClient for ReqwestClient {
    async fn post(&self, req: JsonPost) -> Result<PostResponse, HttpError> {
        let headers = req.headers();
        let response = self
            .inner
            .post(req.url)
            .headers(headers)
            .body(req.body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        let body = response.bytes().await.map_err(classify)?;

        Ok(PostResponse::new(status, body.to_vec()))
    }
}
