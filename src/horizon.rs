//! Horizon tracking cookie.
//!
//! Horizon identifies a subscriber on the site through the
//! `sailthru_hid` cookie. The hid comes from the `horizon` endpoint;
//! this module renders the `Set-Cookie` header for it.

use std::fmt;
use std::time::Duration;

use http::HeaderValue;
use http::header::InvalidHeaderValue;

use crate::api::{ApiError, SailthruClient};
use crate::transport::HttpClient;

/// Name of the Horizon cookie.
pub const COOKIE_NAME: &str = "sailthru_hid";

/// Lifetime used when no duration is given: one year.
pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(31_556_926);

/// A `sailthru_hid` cookie ready to be sent as `Set-Cookie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizonCookie {
    hid: String,
    domain: Option<String>,
    max_age: Option<Duration>,
    secure: bool,
}

impl HorizonCookie {
    /// Creates a one-year cookie for `hid` with no domain attribute.
    #[must_use]
    pub fn new(hid: impl Into<String>) -> Self {
        Self {
            hid: hid.into(),
            domain: None,
            max_age: Some(DEFAULT_MAX_AGE),
            secure: false,
        }
    }

    /// Sets the cookie domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the lifetime. A zero duration makes it a session cookie.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.max_age = (!duration.is_zero()).then_some(duration);
        self
    }

    /// Restricts the cookie to HTTPS.
    #[must_use]
    pub const fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Returns the Horizon id.
    #[must_use]
    pub fn hid(&self) -> &str {
        &self.hid
    }

    /// Returns the cookie domain, if set.
    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// Returns the lifetime; `None` for a session cookie.
    #[must_use]
    pub const fn max_age(&self) -> Option<Duration> {
        self.max_age
    }

    /// Returns true if the cookie is HTTPS-only.
    #[must_use]
    pub const fn is_secure(&self) -> bool {
        self.secure
    }

    /// Renders the cookie as a `Set-Cookie` header value.
    ///
    /// # Errors
    ///
    /// Returns an error if the hid or domain contain characters not
    /// allowed in a header.
    pub fn to_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.to_string())
    }
}

impl fmt::Display for HorizonCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{COOKIE_NAME}={}", self.hid)?;
        if let Some(max_age) = self.max_age {
            write!(f, "; Max-Age={}", max_age.as_secs())?;
        }
        f.write_str("; Path=/")?;
        if let Some(domain) = &self.domain {
            write!(f, "; Domain={domain}")?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        Ok(())
    }
}

/// Derives the cookie domain from a request `Host`: the last two labels,
/// without the port.
///
/// `shop.example.com:8080` becomes `example.com`. Hosts with fewer than
/// two labels are returned without the port.
#[must_use]
pub fn cookie_domain(host: &str) -> String {
    let host = match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()) => name,
        _ => host,
    };
    let host = host.trim_end_matches('.');

    let labels: Vec<&str> = host.rsplitn(3, '.').collect();
    match labels.as_slice() {
        [tld, name, ..] => format!("{name}.{tld}"),
        _ => host.to_string(),
    }
}

impl<H: HttpClient> SailthruClient<H> {
    /// Looks up the hid of `email` and builds its Horizon cookie.
    ///
    /// `duration` follows [`HorizonCookie::with_duration`]; `None` keeps
    /// the one-year default. Returns `None` when the API has no hid for
    /// the address.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the lookup fails.
    pub async fn horizon_cookie(
        &self,
        email: &str,
        domain: &str,
        duration: Option<Duration>,
        secure: bool,
    ) -> Result<Option<HorizonCookie>, ApiError> {
        let Some(hid) = self.horizon_hid(email).await? else {
            tracing::debug!("No Horizon id returned for address");
            return Ok(None);
        };

        let mut cookie = HorizonCookie::new(hid)
            .with_domain(domain)
            .with_secure(secure);
        if let Some(duration) = duration {
            cookie = cookie.with_duration(duration);
        }

        Ok(Some(cookie))
    }
}

#[cfg(test)]
#[path = "horizon_tests.rs"]
mod tests;
