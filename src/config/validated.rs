//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use url::Url;

use crate::api::Credentials;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::sites::{SiteDirectory, SiteInformation};
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// API key and shared secret (required)
    pub credentials: Credentials,

    /// API base URI
    pub api_uri: Url,

    /// Per-site sender details
    pub sites: SiteDirectory,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ api_uri: {}, api_key: {}, sites: {} }}",
            self.api_uri,
            self.credentials.api_key(),
            self.sites.len(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required fields are missing (`api_key`, `secret`)
    /// - The API URI is invalid or not http(s)
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let api_key = cli
            .api_key
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.key.as_deref()))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(field::API_KEY, "Use --api-key or set api.key in config file")
            })?;

        let secret = cli
            .secret
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.secret.as_deref()))
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                ConfigError::missing(field::SECRET, "Use --secret or set api.secret in config file")
            })?;

        let api_uri = Self::resolve_api_uri(cli, toml)?;

        let sites = toml.map_or_else(SiteDirectory::default, |t| {
            SiteDirectory::new(t.sender.order_site_field.clone(), t.sites.clone())
        });

        Ok(Self {
            credentials: Credentials::new(api_key, secret),
            api_uri,
            sites,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    /// Returns the sender details of `site`, see [`SiteDirectory::sender_details`].
    #[must_use]
    pub fn sender_details(&self, site: Option<&str>) -> SiteInformation {
        self.sites.sender_details(site)
    }

    fn resolve_api_uri(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Url, ConfigError> {
        // Priority: CLI explicit > TOML > default
        let uri_str = cli
            .api_uri
            .as_deref()
            .or_else(|| toml.and_then(|t| t.api.uri.as_deref()))
            .unwrap_or(defaults::API_URI);

        let url = Url::parse(uri_str).map_err(|e| ConfigError::InvalidUrl {
            url: uri_str.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: uri_str.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
