//! Default values for configuration options.

/// Default Sailthru API base URI.
pub const API_URI: &str = "https://api.sailthru.com";

/// Name of the site whose details fill in for every other site.
pub const SITE: &str = "default";
