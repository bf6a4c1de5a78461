//! Signing request dispatcher.

use std::fmt;

use http::header::USER_AGENT as USER_AGENT_HEADER;
use http::{HeaderValue, Method};
use url::Url;

use crate::params::Params;
use crate::signature::{SIG_PARAM, signature_hash};
use crate::transport::{HttpClient, HttpRequest};

use super::{ApiError, ApiResponse};

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("Sailthru API Rust Client ", env!("CARGO_PKG_VERSION"));

/// Response format requested when the caller does not set `format`.
const DEFAULT_FORMAT: &str = "json";

/// API key and shared secret.
///
/// `Debug` output never includes the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    secret: String,
}

impl Credentials {
    /// Creates credentials from an API key and shared secret.
    #[must_use]
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
        }
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the shared secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Sailthru API client.
///
/// Every call adds `api_key`, defaults `format` to `json`, signs the
/// parameters and sends exactly one HTTP request. Nothing is retried.
///
/// # Type Parameters
///
/// - `H`: The HTTP client implementation
///
/// # Example
///
/// ```no_run
/// use sailthru_client::{Credentials, Params, SailthruClient};
/// use sailthru_client::transport::ReqwestClient;
/// use url::Url;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SailthruClient::new(
///     ReqwestClient::new(),
///     Credentials::new("api-key", "secret"),
///     Url::parse("https://api.sailthru.com")?,
/// );
/// let response = client.get_email("ann@example.com").await?;
/// println!("{response}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SailthruClient<H> {
    http: H,
    credentials: Credentials,
    api_uri: Url,
}

impl<H> SailthruClient<H> {
    /// Creates a client for the API at `api_uri`.
    #[must_use]
    pub const fn new(http: H, credentials: Credentials, api_uri: Url) -> Self {
        Self {
            http,
            credentials,
            api_uri,
        }
    }

    /// Returns the configured credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the configured API base URI.
    #[must_use]
    pub const fn api_uri(&self) -> &Url {
        &self.api_uri
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &H {
        &self.http
    }

    /// Adds `api_key`, the default `format` and `sig` to the parameters.
    ///
    /// The signature covers every other parameter, including `api_key`
    /// and `format`. A caller-supplied `sig` is replaced.
    #[must_use]
    pub fn sign(&self, mut params: Params) -> Params {
        params.remove(SIG_PARAM);
        params.insert("api_key", self.credentials.api_key());
        if !params.contains_key("format") {
            params.insert("format", DEFAULT_FORMAT);
        }

        let sig = signature_hash(&params, self.credentials.secret());
        params.insert(SIG_PARAM, sig);
        params
    }

    /// Builds `<api_uri>/<action>`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the result is not a valid URL.
    pub fn endpoint_url(&self, action: &str) -> Result<Url, ApiError> {
        let base = self.api_uri.as_str().trim_end_matches('/');
        let action = action.trim_start_matches('/');

        Url::parse(&format!("{base}/{action}")).map_err(|e| ApiError::InvalidUrl {
            action: action.to_string(),
            reason: e.to_string(),
        })
    }
}

impl<H: HttpClient> SailthruClient<H> {
    /// Performs a signed GET request.
    ///
    /// # Errors
    ///
    /// See [`SailthruClient::call`].
    pub async fn api_get(&self, action: &str, params: Params) -> Result<ApiResponse, ApiError> {
        self.call(action, params, Method::GET).await
    }

    /// Performs a signed POST request.
    ///
    /// # Errors
    ///
    /// See [`SailthruClient::call`].
    pub async fn api_post(&self, action: &str, params: Params) -> Result<ApiResponse, ApiError> {
        self.call(action, params, Method::POST).await
    }

    /// Performs a signed DELETE request.
    ///
    /// # Errors
    ///
    /// See [`SailthruClient::call`].
    pub async fn api_delete(
        &self,
        action: &str,
        params: Params,
    ) -> Result<ApiResponse, ApiError> {
        self.call(action, params, Method::DELETE).await
    }

    /// Signs the parameters and sends them to `action`.
    ///
    /// POST sends the parameters as a form body; any other method sends
    /// them in the query string. Non-2xx statuses are returned like any
    /// other response since the API reports failures in the body.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The endpoint URL is invalid ([`ApiError::InvalidUrl`])
    /// - The transport fails ([`ApiError::Http`])
    /// - The response body is empty ([`ApiError::EmptyResponse`])
    pub async fn call(
        &self,
        action: &str,
        params: Params,
        method: Method,
    ) -> Result<ApiResponse, ApiError> {
        let url = self.endpoint_url(action)?;
        let endpoint = url.to_string();
        let form = self.sign(params).to_form();

        let request = if method == Method::POST {
            HttpRequest::form(url, form)
        } else {
            HttpRequest::new(method, url).with_query(&form)
        };
        let request = request.with_header(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));

        tracing::debug!(action, method = %request.method, url = %endpoint, "Calling Sailthru API");

        let response = self
            .http
            .request(request)
            .await
            .map_err(|source| ApiError::Http {
                url: endpoint.clone(),
                source,
            })?;

        if response.is_empty() {
            return Err(ApiError::EmptyResponse { url: endpoint });
        }

        if !response.is_success() {
            tracing::warn!(action, status = %response.status, "Sailthru API returned non-success status");
        }

        Ok(ApiResponse::from_body(&response.body))
    }
}
