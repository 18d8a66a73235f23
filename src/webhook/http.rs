//! Transport seam: one JSON POST in, status and body out.

use http::StatusCode;
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use super::HttpError;

/// A JSON payload POSTed to a webhook endpoint.
///
/// The payload is already encoded; the auth value is sent verbatim.
#[derive(Debug, Clone)]
pub struct JsonPost {
    /// Delivery URL, including any query
    pub url: url::Url,
    /// Value of the `Authorization` header
    pub auth: HeaderValue,
    /// Encoded JSON payload
    pub body: Vec<u8>,
}

impl JsonPost {
    /// Creates a POST of `body` to `url`.
    #[must_use]
    pub const fn new(url: url::Url, auth: HeaderValue, body: Vec<u8>) -> Self {
        Self { url, auth, body }
    }

    /// Headers sent with the POST: `Authorization` and a JSON `Content-Type`.
    #[must_use]
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(AUTHORIZATION, self.auth.clone());
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

/// Status and buffered body of a webhook response.
#[derive(Debug, Clone)]
pub struct PostResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response body
    pub body: Vec<u8>,
}

impl PostResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: StatusCode, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns true for a 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns the body as text, or `None` if it is not UTF-8.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

/// Something that can deliver a [`JsonPost`].
///
/// [`WebhookClient`](super::WebhookClient) is generic over this so tests
/// can record posts instead of touching the network.
///
/// # Example
///
/// ```ignore
/// use cardhook::webhook::{HttpClient, HttpError, JsonPost, PostResponse};
///
/// struct AlwaysOk;
///
/// impl HttpClient for AlwaysOk {
///     async fn post(&self, _req: JsonPost) -> Result<PostResponse, HttpError> {
///         Ok(PostResponse::new(http::StatusCode::OK, Vec::new()))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// POSTs `req` and returns whatever the server answered.
    ///
    /// A non-2xx status is an `Ok` response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if no response was received.
    fn post(
        &self,
        req: JsonPost,
    ) -> impl std::future::Future<Output = Result<PostResponse, HttpError>> + Send;
}
