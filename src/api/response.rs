//! API response decoding.

use std::fmt;

use serde_json::Value;

/// Body of an API response.
///
/// Bodies that parse as JSON are kept as a [`Value`]; anything else is
/// returned verbatim.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Body parsed as JSON.
    Parsed(Value),
    /// Body that is not JSON (lossily decoded as UTF-8).
    Raw(String),
}

impl ApiResponse {
    /// Decodes a response body.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).map_or_else(
            |_| Self::Raw(String::from_utf8_lossy(body).into_owned()),
            Self::Parsed,
        )
    }

    /// Returns the parsed JSON, if any.
    #[must_use]
    pub const fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns a top-level field of a parsed object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_json().and_then(|v| v.get(key))
    }

    /// Returns a top-level field as a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Returns the API error code, if the body reports one.
    #[must_use]
    pub fn error_code(&self) -> Option<i64> {
        self.get("error").and_then(Value::as_i64)
    }

    /// Returns the API error message, if the body reports one.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.get_str("errormsg")
    }

    /// Returns true if the body reports an API error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error_code().is_some()
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(value) => match serde_json::to_string_pretty(value) {
                Ok(text) => f.write_str(&text),
                Err(_) => write!(f, "{value}"),
            },
            Self::Raw(text) => f.write_str(text),
        }
    }
}
