//! HTTP request/response types and client trait.

use http::header::{CONTENT_TYPE, HeaderValue};

use super::HttpError;

/// Media type of signed POST bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A request to the API, ready to send.
///
/// Signed parameters travel either in the query string or as a
/// form-encoded body; see [`HttpRequest::with_query`] and
/// [`HttpRequest::form`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method (GET, POST, DELETE)
    pub method: http::Method,
    /// Target URL, including any query string
    pub url: url::Url,
    /// HTTP headers to send
    pub headers: http::HeaderMap,
    /// Form-encoded body, POST only
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: http::Method, url: url::Url) -> Self {
        Self {
            method,
            url,
            headers: http::HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(url: url::Url) -> Self {
        Self::new(http::Method::GET, url)
    }

    /// Creates a POST request carrying a form-encoded body.
    #[must_use]
    pub fn form(url: url::Url, encoded: String) -> Self {
        let mut request = Self::new(http::Method::POST, url)
            .with_header(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        request.body = Some(encoded.into_bytes());
        request
    }

    /// Replaces the query string with already-encoded parameters.
    #[must_use]
    pub fn with_query(mut self, encoded: &str) -> Self {
        self.url.set_query(Some(encoded));
        self
    }

    /// Adds a header; an existing value under the same name is kept.
    #[must_use]
    pub fn with_header(mut self, name: http::HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Returns the body as text, if any.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|body| std::str::from_utf8(body).ok())
    }
}

/// A buffered API response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: http::StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new HTTP response.
    #[must_use]
    pub const fn new(status: http::StatusCode, headers: http::HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Creates a 200 response with the given body and no headers.
    #[must_use]
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(http::StatusCode::OK, http::HeaderMap::new(), body.into())
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns true if the server sent no body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Sends API requests.
///
/// [`SailthruClient`](crate::SailthruClient) is generic over this trait;
/// [`ReqwestClient`](super::ReqwestClient) is the production
/// implementation and tests substitute a recording client.
///
/// ```ignore
/// use sailthru_client::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Canned(&'static str);
///
/// impl HttpClient for Canned {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::ok(self.0))
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends one request and buffers the response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the server cannot be reached, the request
    /// times out or the URL is rejected.
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl std::future::Future<Output = Result<HttpResponse, HttpError>> + Send;
}
