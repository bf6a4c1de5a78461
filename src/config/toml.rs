//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;
use super::sites::SiteInformation;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API access section
    #[serde(default)]
    pub api: ApiSection,

    /// Order-to-site mapping
    #[serde(default)]
    pub sender: SenderSection,

    /// Sender details keyed by site name
    #[serde(default)]
    pub sites: HashMap<String, SiteInformation>,
}

/// API access section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// API base URI
    pub uri: Option<String>,

    /// API key
    pub key: Option<String>,

    /// Shared secret
    pub secret: Option<String>,
}

/// Sender selection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SenderSection {
    /// Name of the order field holding the site id
    pub order_site_field: Option<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# Sailthru client configuration

[api]
# API base URI (default: https://api.sailthru.com, can be overridden by --api-uri)
# uri = "https://api.sailthru.com"

# API key (required, can be overridden by --api-key)
# key = "your-api-key"

# Shared secret used to sign requests and verify postbacks (required)
# secret = "your-secret"

[sender]
# Order field holding the site id; without it every order uses [sites.default]
# order_site_field = "site_id"

# Sender details per site. Empty fields fall back to [sites.default].
[sites.default]
# icon_file = "example_icon.jpg"
# name = "Example Title"
# site_url = "http://www.example.com/"
# reply_email = "service@example.com"
# email_template = "default_template"
"#
    .to_string()
}
